//! CLI arguments for the `quote` binary.

use {
    clap::{Parser, Subcommand},
    model::Percent,
    std::path::PathBuf,
};

/// Find the best trades through Uniswap V2 style pools.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The log filter.
    #[arg(long, env, default_value = "warn,router=info")]
    pub log: String,

    /// Emit logs as JSON.
    #[arg(long, env)]
    pub json_logs: bool,

    /// Path to the router configuration file. Built-in networks and
    /// deployments are used when omitted.
    #[arg(long, env)]
    pub config: Option<PathBuf>,

    /// Path to the TOML pool snapshot to search.
    #[arg(long, env)]
    pub snapshot: PathBuf,

    /// Slippage tolerance in percent used for the reported bounds.
    #[arg(long, env, default_value = "0.5")]
    pub slippage: Percent,

    #[command(subcommand)]
    pub command: Command,
}

/// Currencies are given as `native`, a token address or a token symbol from
/// the snapshot. Amounts are in base units.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sell an exact amount.
    ExactIn {
        #[arg(long)]
        sell: String,
        #[arg(long)]
        buy: String,
        #[arg(long)]
        amount: String,
    },
    /// Buy an exact amount.
    ExactOut {
        #[arg(long)]
        sell: String,
        #[arg(long)]
        buy: String,
        #[arg(long)]
        amount: String,
    },
}

#[cfg(test)]
mod tests {
    use {super::*, clap::CommandFactory};

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_subcommands() {
        let args = Args::parse_from([
            "quote",
            "--snapshot",
            "pools.toml",
            "--slippage",
            "1",
            "exact-out",
            "--sell",
            "native",
            "--buy",
            "DAI",
            "--amount",
            "1000",
        ]);
        assert_eq!(args.slippage, "1".parse().unwrap());
        assert!(args.config.is_none());
        assert!(matches!(
            args.command,
            Command::ExactOut { ref sell, .. } if sell == "native"
        ));
    }
}
