//! Pool reserves captured at some block, stored as TOML.
//!
//! ```toml
//! chain-id = 1
//!
//! [[token]]
//! address = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
//! decimals = 18
//! symbol = "WETH"
//!
//! [[pool]]
//! variant = "uniswap"
//! token-a = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
//! token-b = "0x6B175474E89094C44Da98b954EedeAC495271d0F"
//! reserve-a = "1000000000000000000000"
//! reserve-b = "3000000000000000000000000"
//! ```

use {
    crate::{Deployments, Pool, RouterVariant},
    alloy_primitives::{Address, U256},
    anyhow::{Context, Result, anyhow, ensure},
    model::{Amount, ChainId, Currency, Networks, Token},
    serde::Deserialize,
    serde_with::{DisplayFromStr, serde_as},
    std::{collections::HashMap, path::Path},
};

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct File {
    chain_id: ChainId,
    #[serde(default, rename = "token")]
    tokens: Vec<TokenEntry>,
    #[serde(default, rename = "pool")]
    pools: Vec<PoolEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct TokenEntry {
    address: Address,
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
}

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PoolEntry {
    variant: RouterVariant,
    token_a: Address,
    token_b: Address,
    #[serde_as(as = "DisplayFromStr")]
    reserve_a: U256,
    #[serde_as(as = "DisplayFromStr")]
    reserve_b: U256,
}

/// The tokens and pools of one chain.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub chain_id: ChainId,
    pub tokens: HashMap<Address, Token>,
    pub pools: Vec<Pool>,
}

impl Snapshot {
    /// Resolves `native`, a token address or a token symbol to a currency.
    pub fn currency(&self, name: &str, networks: &Networks) -> Result<Currency> {
        if name.eq_ignore_ascii_case("native") {
            let network = networks.get(self.chain_id)?;
            return Ok(network.native.clone().into());
        }
        if let Ok(address) = name.parse::<Address>() {
            return self
                .tokens
                .get(&address)
                .map(|token| token.clone().into())
                .ok_or_else(|| anyhow!("token {address} is not part of the snapshot"));
        }
        let mut matches = self
            .tokens
            .values()
            .filter(|token| token.symbol.as_deref() == Some(name));
        match (matches.next(), matches.next()) {
            (Some(token), None) => Ok(token.clone().into()),
            (Some(_), Some(_)) => Err(anyhow!("symbol {name} is ambiguous")),
            (None, _) => Err(anyhow!("unknown token {name}")),
        }
    }
}

pub fn load_path(path: &Path, deployments: &Deployments) -> Result<Snapshot> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot at {path:?}"))?;
    load_string(&data, deployments).with_context(|| format!("invalid snapshot at {path:?}"))
}

pub fn load_string(data: &str, deployments: &Deployments) -> Result<Snapshot> {
    let file = toml::de::from_str::<File>(data).context("TOML syntax error")?;
    let chain_id = file.chain_id;

    let mut tokens = HashMap::new();
    for entry in file.tokens {
        let token = Token {
            chain_id,
            address: entry.address,
            decimals: entry.decimals,
            symbol: entry.symbol,
            name: entry.name,
        };
        ensure!(
            tokens.insert(entry.address, token).is_none(),
            "duplicate token {}",
            entry.address
        );
    }

    let pools = file
        .pools
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let token = |address: &Address| {
                tokens
                    .get(address)
                    .cloned()
                    .with_context(|| format!("pool {i} uses undeclared token {address}"))
            };
            let deployment = deployments.get(chain_id, entry.variant)?;
            Pool::new(
                Amount::new(token(&entry.token_a)?, entry.reserve_a),
                Amount::new(token(&entry.token_b)?, entry.reserve_b),
                deployment,
            )
            .with_context(|| format!("invalid pool {i}"))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(%chain_id, tokens = tokens.len(), pools = pools.len(), "loaded snapshot");
    Ok(Snapshot {
        chain_id,
        tokens,
        pools,
    })
}
