//! Constant product pool math, route composition and best trade search for
//! Uniswap V2 style exchanges.

pub mod best_trade;
pub mod cli;
pub mod config;
pub mod deployment;
pub mod pool;
pub mod route;
pub mod run;
pub mod snapshot;
pub mod trade;
pub mod zap;

pub use {
    best_trade::{BestTradeOptions, best_trade_exact_in, best_trade_exact_out},
    deployment::{Deployment, Deployments, RouterVariant},
    pool::{Pool, pair_provider::PairProvider},
    route::Route,
    run::start,
    trade::{Trade, TradeType},
    zap::{LiquidityMigration, LiquidityZap, ZapLeg},
};
use {model::ValidationError, number::ArithmeticError, thiserror::Error};

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("pool has no reserves")]
    InsufficientReserves,
    #[error("input amount too small to produce any output")]
    InsufficientInputAmount,
    #[error("output amount must be positive")]
    InsufficientOutputAmount,
    #[error("pool can not provide the requested output")]
    InsufficientLiquidity,
    #[error("reserve exceeds the 112 bit pool limit")]
    ReserveOverflow,
    #[error("no route between the requested currencies")]
    NoRoute,
}

impl Error {
    /// Whether the error is caused by the state of a single pool rather than
    /// by the caller. Searches skip candidates failing this way.
    pub fn is_insufficient(&self) -> bool {
        matches!(
            self,
            Self::InsufficientReserves
                | Self::InsufficientInputAmount
                | Self::InsufficientOutputAmount
                | Self::InsufficientLiquidity
                | Self::ReserveOverflow
        )
    }
}

impl From<model::Error> for Error {
    fn from(err: model::Error) -> Self {
        match err {
            model::Error::Validation(err) => Self::Validation(err),
            model::Error::Arithmetic(err) => Self::Arithmetic(err),
        }
    }
}
