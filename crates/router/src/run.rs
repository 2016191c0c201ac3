use {
    crate::{
        Trade,
        TradeType,
        best_trade_exact_in,
        best_trade_exact_out,
        cli,
        config::{self, Config},
        snapshot,
    },
    alloy_primitives::U256,
    anyhow::{Context, Result},
    clap::Parser,
    model::{Amount, Percent},
    std::fmt::Write,
};

pub fn start(args: impl Iterator<Item = String>) {
    let args = cli::Args::parse_from(args);
    let mut obs_config = observe::Config::default().with_env_filter(&args.log);
    if args.json_logs {
        obs_config = obs_config.with_json_format();
    }
    observe::tracing::initialize(&obs_config);
    tracing::info!("running quote with {args:#?}");

    match run(args) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            tracing::error!(?err, "quote failed");
            std::process::exit(1);
        }
    }
}

/// Loads the inputs, searches and renders the ranked trades.
pub fn run(args: cli::Args) -> Result<String> {
    let config = match &args.config {
        Some(path) => config::file::load_path(path)?,
        None => Config::default(),
    };
    let snapshot = snapshot::load_path(&args.snapshot, &config.deployments)?;
    let currency = |name: &str| {
        snapshot
            .currency(name, &config.networks)
            .with_context(|| format!("invalid currency {name:?}"))
    };
    let amount = |value: &str| {
        value
            .parse::<U256>()
            .with_context(|| format!("invalid amount {value:?}"))
    };

    let trades = match &args.command {
        cli::Command::ExactIn { sell, buy, amount: value } => best_trade_exact_in(
            &snapshot.pools,
            &Amount::new(currency(sell)?, amount(value)?),
            &currency(buy)?,
            config.best_trade,
            &config.networks,
        )?,
        cli::Command::ExactOut { sell, buy, amount: value } => best_trade_exact_out(
            &snapshot.pools,
            &currency(sell)?,
            &Amount::new(currency(buy)?, amount(value)?),
            config.best_trade,
            &config.networks,
        )?,
    };
    tracing::info!(trades = trades.len(), "search finished");
    report(&trades, &args.slippage)
}

/// Renders one block per trade, best first.
pub fn report(trades: &[Trade], slippage: &Percent) -> Result<String> {
    let mut out = String::new();
    if trades.is_empty() {
        writeln!(out, "no route found")?;
        return Ok(out);
    }
    for (rank, trade) in trades.iter().enumerate() {
        writeln!(out, "#{} {}", rank + 1, trade.route())?;
        writeln!(out, "  input:           {}", trade.input_amount())?;
        writeln!(out, "  output:          {}", trade.output_amount())?;
        writeln!(out, "  execution price: {}", trade.execution_price())?;
        writeln!(out, "  price impact:    {}", trade.price_impact())?;
        match trade.trade_type() {
            TradeType::ExactInput => writeln!(
                out,
                "  minimum output:  {} ({slippage} slippage)",
                trade.minimum_amount_out(slippage)?
            )?,
            TradeType::ExactOutput => writeln!(
                out,
                "  maximum input:   {} ({slippage} slippage)",
                trade.maximum_amount_in(slippage)?
            )?,
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            Route,
            pool::tests::{token, uniswap_pool},
        },
        model::Networks,
    };

    #[test]
    fn renders_trades() {
        let (a, b) = (token(1).with_symbol("A"), token(2).with_symbol("B"));
        let route = Route::new(
            vec![uniswap_pool(&a, 10u128.pow(24), &b, 10u128.pow(24))],
            a.clone().into(),
            b.clone().into(),
            &Networks::builtin(),
        )
        .unwrap();
        let amount_in = Amount::new(a.clone(), U256::from(110u64 * 10u64.pow(12)));
        let trade = Trade::exact_in(route, &amount_in).unwrap();
        let report = report(&[trade], &"5".parse().unwrap()).unwrap();
        assert!(report.starts_with("#1 A -> B\n"));
        assert!(report.contains("input:           0.00011 A"));
        assert!(report.contains("minimum output:"));
        assert!(report.contains("(5.00% slippage)"));

        assert_eq!(
            super::report(&[], &Percent::zero()).unwrap(),
            "no route found\n"
        );
    }
}
