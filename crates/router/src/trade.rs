use {
    crate::{Error, pool::Pool, route::Route},
    model::{Amount, Percent, Price, ValidationError},
    number::Rational,
    std::cmp::Ordering,
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TradeType {
    /// The input amount is fixed and the output is computed.
    ExactInput,
    /// The output amount is fixed and the required input is computed.
    ExactOutput,
}

/// The outcome of executing an amount along a route.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Trade {
    route: Route,
    trade_type: TradeType,
    input_amount: Amount,
    output_amount: Amount,
    execution_price: Price,
    next_mid_price: Price,
    price_impact: Percent,
}

impl Trade {
    /// Sells exactly `amount_in` of the route's input currency.
    pub fn exact_in(route: Route, amount_in: &Amount) -> Result<Self, Error> {
        if amount_in.currency() != route.input() {
            return Err(
                ValidationError::currency_mismatch(route.input(), amount_in.currency()).into(),
            );
        }

        let mut amount = amount_in.with_currency(route.wrapped_input().clone());
        let mut next_pools = Vec::with_capacity(route.hops());
        for pool in route.pools() {
            let (output, next) = pool.output_for(&amount)?;
            amount = output;
            next_pools.push(next);
        }

        let output_amount = amount.with_currency(route.output().clone());
        Self::new(route, TradeType::ExactInput, amount_in.clone(), output_amount, next_pools)
    }

    /// Buys exactly `amount_out` of the route's output currency.
    pub fn exact_out(route: Route, amount_out: &Amount) -> Result<Self, Error> {
        if amount_out.currency() != route.output() {
            return Err(
                ValidationError::currency_mismatch(route.output(), amount_out.currency()).into(),
            );
        }

        let mut amount = amount_out.with_currency(route.wrapped_output().clone());
        let mut next_pools = Vec::with_capacity(route.hops());
        for pool in route.pools().iter().rev() {
            let (input, next) = pool.input_for(&amount)?;
            amount = input;
            next_pools.push(next);
        }
        next_pools.reverse();

        let input_amount = amount.with_currency(route.input().clone());
        Self::new(route, TradeType::ExactOutput, input_amount, amount_out.clone(), next_pools)
    }

    fn new(
        route: Route,
        trade_type: TradeType,
        input_amount: Amount,
        output_amount: Amount,
        next_pools: Vec<Pool>,
    ) -> Result<Self, Error> {
        let mid_price = route.mid_price()?;
        let next_mid_price = route.with_pools(next_pools).mid_price()?;
        let execution_price = Price::from_amounts(&input_amount, &output_amount)?;
        let price_impact = price_impact(&mid_price, &input_amount, &output_amount)?;
        Ok(Self {
            route,
            trade_type,
            input_amount,
            output_amount,
            execution_price,
            next_mid_price,
            price_impact,
        })
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    pub fn input_amount(&self) -> &Amount {
        &self.input_amount
    }

    pub fn output_amount(&self) -> &Amount {
        &self.output_amount
    }

    pub fn execution_price(&self) -> &Price {
        &self.execution_price
    }

    /// The mid price of the route after this trade executed.
    pub fn next_mid_price(&self) -> &Price {
        &self.next_mid_price
    }

    pub fn price_impact(&self) -> &Percent {
        &self.price_impact
    }

    /// The least output to accept when the price may move against the
    /// trader by `slippage`. For exact output trades this is the output
    /// itself.
    pub fn minimum_amount_out(&self, slippage: &Percent) -> Result<Amount, Error> {
        let factor = slippage_factor(slippage)?;
        match self.trade_type {
            TradeType::ExactOutput => Ok(self.output_amount.clone()),
            TradeType::ExactInput => Ok(self.output_amount.mul_floor(&factor.invert()?)?),
        }
    }

    /// The most input to spend when the price may move against the trader
    /// by `slippage`. For exact input trades this is the input itself.
    pub fn maximum_amount_in(&self, slippage: &Percent) -> Result<Amount, Error> {
        let factor = slippage_factor(slippage)?;
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount.clone()),
            TradeType::ExactOutput => Ok(self.input_amount.mul_floor(&factor)?),
        }
    }
}

/// `1 + slippage`, rejecting negative tolerances.
pub(crate) fn slippage_factor(slippage: &Percent) -> Result<Rational, Error> {
    if slippage.is_negative() {
        return Err(ValidationError::NegativeSlippage.into());
    }
    Ok(&Rational::one() + slippage.as_rational())
}

/// `floor(amount / (1 + slippage))`.
pub(crate) fn with_slippage(amount: &Amount, slippage: &Percent) -> Result<Amount, Error> {
    Ok(amount.mul_floor(&slippage_factor(slippage)?.invert()?)?)
}

/// How much worse the output is than what the mid price promises.
fn price_impact(mid_price: &Price, input: &Amount, output: &Amount) -> Result<Percent, Error> {
    let quoted = mid_price.raw() * &input.to_rational();
    let impact = (&quoted - &output.to_rational()).checked_div(&quoted)?;
    Ok(Percent::from(impact))
}

/// Ranks trades between the same currencies; `Less` means `a` is better.
///
/// More output wins, then less input, then less price impact and finally
/// fewer hops.
pub fn trade_comparator(a: &Trade, b: &Trade) -> Ordering {
    b.output_amount
        .raw()
        .cmp(&a.output_amount.raw())
        .then_with(|| a.input_amount.raw().cmp(&b.input_amount.raw()))
        .then_with(|| a.price_impact.cmp(&b.price_impact))
        .then_with(|| a.route.hops().cmp(&b.route.hops()))
}
