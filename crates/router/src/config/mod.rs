use {
    crate::{BestTradeOptions, Deployments},
    model::Networks,
};

pub mod file;

/// Everything the search needs besides the pools themselves.
#[derive(Clone, Debug)]
pub struct Config {
    pub networks: Networks,
    pub deployments: Deployments,
    pub best_trade: BestTradeOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            networks: Networks::builtin(),
            deployments: Deployments::builtin(),
            best_trade: BestTradeOptions::default(),
        }
    }
}
