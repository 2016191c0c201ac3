//! Providing liquidity from a single currency and moving liquidity between
//! pools of the same pair.

use {
    crate::{
        Error,
        best_trade::{BestTradeOptions, best_trade_exact_in},
        pool::Pool,
        trade::{Trade, with_slippage},
    },
    alloy_primitives::U256,
    model::{Amount, Networks, Percent, Token, ValidationError},
    tracing::instrument,
};

/// One half of a zap: how the input becomes one of the pool's tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ZapLeg {
    /// `None` when the input already is the pool token.
    pub trade: Option<Trade>,
    pub output: Amount,
    pub minimum_output: Amount,
}

impl ZapLeg {
    pub fn from_trade(trade: Trade, slippage: &Percent) -> Result<Self, Error> {
        Ok(Self {
            output: trade.output_amount().clone(),
            minimum_output: trade.minimum_amount_out(slippage)?,
            trade: Some(trade),
        })
    }

    pub fn direct(amount: Amount) -> Self {
        Self {
            trade: None,
            output: amount.clone(),
            minimum_output: amount,
        }
    }
}

/// Converts a single input amount into liquidity of `pool`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityZap {
    pool: Pool,
    input_amount: Amount,
    legs: (ZapLeg, ZapLeg),
    deposit: (Amount, Amount),
    minimum_deposit: (Amount, Amount),
    liquidity_minted: Amount,
}

impl LiquidityZap {
    /// Assembles a zap from two legs whose outputs are the pool's tokens, in
    /// any order.
    pub fn new(
        pool: Pool,
        input_amount: Amount,
        legs: (ZapLeg, ZapLeg),
        total_supply: &Amount,
        slippage: &Percent,
    ) -> Result<Self, Error> {
        let deposit = pool.deposit_amounts(&legs.0.output, &legs.1.output)?;
        let minimum_deposit = (
            with_slippage(&deposit.0, slippage)?,
            with_slippage(&deposit.1, slippage)?,
        );
        let liquidity_minted = pool.liquidity_minted(total_supply, &deposit.0, &deposit.1)?;
        Ok(Self {
            pool,
            input_amount,
            legs,
            deposit,
            minimum_deposit,
            liquidity_minted,
        })
    }

    /// Zaps `amount_in` into `target`, trading each half along the best
    /// route found among `pools`.
    ///
    /// The first half is `floor(amount_in / 2)` and goes to `token0`, the
    /// remainder goes to `token1`.
    #[instrument(skip_all, fields(pool = ?target.address(), amount_in = %amount_in))]
    pub fn best_exact_in(
        pools: &[Pool],
        target: &Pool,
        amount_in: &Amount,
        total_supply: &Amount,
        slippage: &Percent,
        options: BestTradeOptions,
        networks: &Networks,
    ) -> Result<Self, Error> {
        let half = amount_in.raw() / U256::from(2);
        let halves = (
            Amount::new(amount_in.currency().clone(), half),
            Amount::new(amount_in.currency().clone(), amount_in.raw() - half),
        );
        let wrapped_input = networks.wrap(amount_in.currency(), target.chain_id())?;
        let leg = |amount: &Amount, token: &Token| -> Result<ZapLeg, Error> {
            if wrapped_input == *token {
                return Ok(ZapLeg::direct(amount.with_currency(token.clone())));
            }
            let trades =
                best_trade_exact_in(pools, amount, &token.clone().into(), options, networks)?;
            let trade = trades.into_iter().next().ok_or(Error::NoRoute)?;
            tracing::debug!(route = %trade.route(), output = %trade.output_amount(), "zap leg");
            ZapLeg::from_trade(trade, slippage)
        };
        let legs = (
            leg(&halves.0, target.token0())?,
            leg(&halves.1, target.token1())?,
        );
        Self::new(target.clone(), amount_in.clone(), legs, total_supply, slippage)
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn input_amount(&self) -> &Amount {
        &self.input_amount
    }

    pub fn legs(&self) -> &(ZapLeg, ZapLeg) {
        &self.legs
    }

    /// The amounts deposited into the pool, in `(token0, token1)` order.
    pub fn deposit(&self) -> &(Amount, Amount) {
        &self.deposit
    }

    pub fn minimum_deposit(&self) -> &(Amount, Amount) {
        &self.minimum_deposit
    }

    pub fn liquidity_minted(&self) -> &Amount {
        &self.liquidity_minted
    }
}

/// Removes a liquidity position from one pool and adds the proceeds to
/// another pool of the same pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityMigration {
    source: Pool,
    target: Pool,
    liquidity: Amount,
    removed: (Amount, Amount),
    minimum_removed: (Amount, Amount),
    deposit: (Amount, Amount),
    minimum_deposit: (Amount, Amount),
}

impl LiquidityMigration {
    pub fn new(
        source: Pool,
        target: Pool,
        liquidity: Amount,
        total_supply: &Amount,
        slippage: &Percent,
    ) -> Result<Self, Error> {
        if source.token0() != target.token0() || source.token1() != target.token1() {
            return Err(ValidationError::TokenNotInPool.into());
        }

        let removed = (
            source.liquidity_value(source.token0(), total_supply, &liquidity)?,
            source.liquidity_value(source.token1(), total_supply, &liquidity)?,
        );
        let minimum_removed = (
            with_slippage(&removed.0, slippage)?,
            with_slippage(&removed.1, slippage)?,
        );
        let deposit = target.deposit_amounts(&removed.0, &removed.1)?;
        let minimum_deposit = (
            with_slippage(&deposit.0, slippage)?,
            with_slippage(&deposit.1, slippage)?,
        );
        Ok(Self {
            source,
            target,
            liquidity,
            removed,
            minimum_removed,
            deposit,
            minimum_deposit,
        })
    }

    pub fn source(&self) -> &Pool {
        &self.source
    }

    pub fn target(&self) -> &Pool {
        &self.target
    }

    pub fn liquidity(&self) -> &Amount {
        &self.liquidity
    }

    /// The amounts received from the source pool, in `(token0, token1)`
    /// order.
    pub fn removed(&self) -> &(Amount, Amount) {
        &self.removed
    }

    pub fn minimum_removed(&self) -> &(Amount, Amount) {
        &self.minimum_removed
    }

    pub fn deposit(&self) -> &(Amount, Amount) {
        &self.deposit
    }

    pub fn minimum_deposit(&self) -> &(Amount, Amount) {
        &self.minimum_deposit
    }
}
