//! Asset identities.
//!
//! Pools only ever hold ERC20 tokens, so a chain's gas asset has to be
//! explicitly translated into its wrapped token (see [`crate::Networks`])
//! before any pool math happens.

use {
    crate::{ChainId, ValidationError},
    alloy_primitives::Address,
    serde::{Deserialize, Serialize},
    std::{
        fmt::{self, Display, Formatter},
        hash::{Hash, Hasher},
    },
};

/// Either a chain's gas asset or an ERC20 token.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Currency {
    pub fn decimals(&self) -> u8 {
        match self {
            Self::Native(native) => native.decimals,
            Self::Token(token) => token.decimals,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Native(native) => Some(&native.symbol),
            Self::Token(token) => token.symbol.as_deref(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Native(native) => Some(&native.name),
            Self::Token(token) => token.name.as_deref(),
        }
    }

    /// Returns the token if this currency can be used directly in pools.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Native(_) => None,
            Self::Token(token) => Some(token),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    /// The chain a token lives on. Native currencies are not bound to a
    /// single chain (ETH is the gas asset of several networks).
    pub fn chain_id(&self) -> Option<ChainId> {
        self.as_token().map(|token| token.chain_id)
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Self::Native(native)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Native(native) => f.write_str(&native.symbol),
            Self::Token(token) => write!(f, "{token}"),
        }
    }
}

/// The gas asset of a chain.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct NativeCurrency {
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

impl NativeCurrency {
    pub fn ether() -> Self {
        Self {
            decimals: 18,
            symbol: "ETH".to_string(),
            name: "Ether".to_string(),
        }
    }
}

/// An ERC20 token.
///
/// Two tokens are the same if they live on the same chain at the same
/// address; the decimals and descriptive metadata are not part of the
/// identity. Address comparison is on the raw bytes, so the casing of a
/// checksummed hex string is irrelevant.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Token {
    pub chain_id: ChainId,
    pub address: Address,
    pub decimals: u8,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Token {
    pub fn new(chain_id: ChainId, address: Address, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether this token is `token0` of a pair with `other`.
    pub fn sorts_before(&self, other: &Token) -> Result<bool, ValidationError> {
        if self.chain_id != other.chain_id {
            return Err(ValidationError::ChainMismatch);
        }
        if self.address == other.address {
            return Err(ValidationError::IdenticalTokens);
        }
        Ok(self.address < other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => f.write_str(symbol),
            None => write!(f, "{:?}", self.address),
        }
    }
}
