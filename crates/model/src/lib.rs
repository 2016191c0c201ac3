//! Value types shared by the pool, route and trade logic: chains, currencies,
//! amounts, prices and percentages.

pub mod amount;
pub mod currency;
pub mod network;
pub mod percent;
pub mod price;

pub use {
    amount::Amount,
    currency::{Currency, NativeCurrency, Token},
    network::{Network, Networks},
    percent::Percent,
    price::Price,
};
use {
    alloy_primitives::Address,
    number::ArithmeticError,
    serde::{Deserialize, Serialize},
    std::fmt::{self, Display, Formatter},
    thiserror::Error,
};

/// EIP-155 chain identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    pub const MAINNET: Self = Self(1);
    pub const BNB: Self = Self(56);
    pub const POLYGON: Self = Self(137);
}

impl Display for ChainId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller errors. These are never the result of market conditions and
/// retrying with the same inputs fails the same way.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("chain mismatch")]
    ChainMismatch,
    #[error("currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },
    #[error("native currency used where a token is required")]
    NotAToken,
    #[error("a pair needs two distinct tokens")]
    IdenticalTokens,
    #[error("token is not part of the pool")]
    TokenNotInPool,
    #[error("route has no pools")]
    EmptyRoute,
    #[error("route input is not part of the first pool")]
    InputNotInRoute,
    #[error("route output is not reached by the last pool")]
    OutputNotInRoute,
    #[error("discontinuous route")]
    DiscontinuousRoute,
    #[error("negative slippage tolerance")]
    NegativeSlippage,
    #[error("no candidate pools")]
    NoPools,
    #[error("max hops must be positive")]
    InvalidMaxHops,
    #[error("chain id can not be determined from a native input and output")]
    UnknownChain,
    #[error("no network configured for chain {0}")]
    UnknownNetwork(ChainId),
    #[error("no deployment of {variant} configured for chain {chain_id}")]
    UnknownDeployment { chain_id: ChainId, variant: String },
    #[error("liquidity exceeds the total supply")]
    ExcessLiquidity,
    #[error("value does not fit into 256 bits")]
    OutOfRange,
}

impl ValidationError {
    pub fn currency_mismatch(expected: &Currency, actual: &Currency) -> Self {
        Self::CurrencyMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Erc20 token pair specified by two contract addresses.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TokenPair(Address, Address);

impl TokenPair {
    /// Create a new token pair from two addresses.
    /// The addresses must not be the equal.
    pub fn new(token_a: Address, token_b: Address) -> Option<Self> {
        match token_a.cmp(&token_b) {
            std::cmp::Ordering::Less => Some(Self(token_a, token_b)),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(Self(token_b, token_a)),
        }
    }

    /// Used to determine if `token` is among the pair.
    pub fn contains(&self, token: &Address) -> bool {
        self.0 == *token || self.1 == *token
    }

    /// Returns the token in the pair which is not the one passed in, or None
    /// if the token passed in is not part of the pair.
    pub fn other(&self, token: &Address) -> Option<Address> {
        if &self.0 == token {
            Some(self.1)
        } else if &self.1 == token {
            Some(self.0)
        } else {
            None
        }
    }

    /// The first address is always the lower one.
    /// The addresses are never equal.
    pub fn get(&self) -> (Address, Address) {
        (self.0, self.1)
    }
}

impl IntoIterator for TokenPair {
    type Item = Address;
    type IntoIter = std::iter::Chain<std::iter::Once<Address>, std::iter::Once<Address>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.0).chain(std::iter::once(self.1))
    }
}

impl<'a> IntoIterator for &'a TokenPair {
    type Item = &'a Address;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a Address>, std::iter::Once<&'a Address>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.0).chain(std::iter::once(&self.1))
    }
}
