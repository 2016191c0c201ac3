//! Exact numeric primitives shared by every pricing computation.

pub mod conversions;
pub mod rational;
pub mod u256_ext;

pub use rational::{ArithmeticError, Rational, Rounding};
