use {
    crate::{
        BestTradeOptions,
        Deployment,
        Deployments,
        PairProvider,
        RouterVariant,
        config::Config,
    },
    alloy_primitives::{Address, B256},
    anyhow::{Context, Result, ensure},
    model::{ChainId, NativeCurrency, Network, Networks, Token},
    num::rational::Ratio,
    serde::Deserialize,
    serde_with::{DisplayFromStr, serde_as},
    std::path::Path,
};

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct File {
    /// Start from the well-known networks and deployments. Entries listed in
    /// the file replace built-in entries with the same key.
    #[serde(default = "default_builtin")]
    builtin: bool,

    /// The maximum number of pools a route may use.
    #[serde(default = "default_max_hops")]
    max_hops: usize,

    /// The number of ranked trades to return.
    #[serde(default = "default_max_results")]
    max_results: usize,

    #[serde(default, rename = "network")]
    networks: Vec<NetworkEntry>,

    #[serde(default, rename = "deployment")]
    deployments: Vec<DeploymentEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct NetworkEntry {
    chain_id: ChainId,
    native: NativeCurrency,
    wrapped: Token,
}

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct DeploymentEntry {
    chain_id: ChainId,
    variant: RouterVariant,
    factory: Address,
    init_code_digest: B256,

    /// Fraction of the input kept by the pool, e.g. `"3/1000"`. Defaults to
    /// the usual fee of the exchange.
    #[serde_as(as = "Option<DisplayFromStr>")]
    fee: Option<Ratio<u32>>,
}

fn default_builtin() -> bool {
    true
}

fn default_max_hops() -> usize {
    BestTradeOptions::default().max_hops
}

fn default_max_results() -> usize {
    BestTradeOptions::default().max_num_results
}

/// Load the router configuration from a TOML file.
pub fn load_path(path: &Path) -> Result<Config> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {path:?}"))?;
    load_string(&data).with_context(|| format!("invalid config at {path:?}"))
}

/// Load the router configuration from a TOML string.
pub fn load_string(data: &str) -> Result<Config> {
    let file = toml::de::from_str::<File>(data).context("TOML syntax error")?;
    ensure!(file.max_hops > 0, "max-hops must be at least 1");

    let (mut networks, mut deployments) = if file.builtin {
        (Networks::builtin(), Deployments::builtin())
    } else {
        (Networks::new(), Deployments::new())
    };

    for entry in file.networks {
        let chain_id = entry.chain_id;
        networks
            .insert(
                chain_id,
                Network {
                    native: entry.native,
                    wrapped: entry.wrapped,
                },
            )
            .with_context(|| format!("invalid network {chain_id}"))?;
    }

    for entry in file.deployments {
        let fee = entry.fee.unwrap_or_else(|| entry.variant.default_fee());
        ensure!(
            fee.numer() < fee.denom(),
            "fee {fee} of {} on chain {} must be below 1",
            entry.variant,
            entry.chain_id,
        );
        deployments.insert(Deployment {
            chain_id: entry.chain_id,
            variant: entry.variant,
            pair_provider: PairProvider {
                factory: entry.factory,
                init_code_digest: entry.init_code_digest,
            },
            fee,
        });
    }

    tracing::debug!(
        deployments = deployments.len(),
        max_hops = file.max_hops,
        max_results = file.max_results,
        "loaded router config"
    );
    Ok(Config {
        networks,
        deployments,
        best_trade: BestTradeOptions {
            max_num_results: file.max_results,
            max_hops: file.max_hops,
        },
    })
}
