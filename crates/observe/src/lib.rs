//! This crate contains the initialization logic for logging shared by the
//! binaries of the workspace.
pub mod config;
pub mod tracing;

pub use config::Config;
