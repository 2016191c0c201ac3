//! Depth first search for the best trades over a set of candidate pools.
//!
//! Every pool is used at most once per route and the search depth is bounded
//! by the maximum number of hops, so the recursion always terminates. The
//! number of explored paths grows exponentially with the number of hops,
//! which is why the default is kept small.

use {
    crate::{
        Error,
        pool::Pool,
        route::Route,
        trade::{Trade, trade_comparator},
    },
    model::{Amount, ChainId, Currency, Networks, Token, ValidationError},
    std::cmp::Ordering,
    tracing::instrument,
};

/// The maximum number of hops to use when trading with AMMs along a path.
const DEFAULT_MAX_HOPS: usize = 3;

/// The number of trades to return.
const DEFAULT_MAX_NUM_RESULTS: usize = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BestTradeOptions {
    pub max_num_results: usize,
    pub max_hops: usize,
}

impl Default for BestTradeOptions {
    fn default() -> Self {
        Self {
            max_num_results: DEFAULT_MAX_NUM_RESULTS,
            max_hops: DEFAULT_MAX_HOPS,
        }
    }
}

/// The best trades selling exactly `amount_in` for `currency_out`, best
/// first.
///
/// Pools that can not handle a candidate amount are skipped. An empty result
/// means no route exists.
#[instrument(skip_all, fields(amount_in = %amount_in, currency_out = %currency_out))]
pub fn best_trade_exact_in(
    pools: &[Pool],
    amount_in: &Amount,
    currency_out: &Currency,
    options: BestTradeOptions,
    networks: &Networks,
) -> Result<Vec<Trade>, Error> {
    let chain_id = validate(pools, amount_in.currency(), currency_out, &options)?;
    let search = Search {
        networks,
        currency_in: amount_in.currency(),
        currency_out,
        token_out: networks.wrap(currency_out, chain_id)?,
    };
    let mut results = RankedTrades::new(options.max_num_results);
    let candidates = pools.iter().collect::<Vec<_>>();
    search.exact_in(
        &candidates,
        amount_in,
        &networks.wrap_amount(amount_in, chain_id)?,
        &[],
        options.max_hops,
        &mut results,
    )?;
    tracing::debug!(found = results.len(), "best trade exact in");
    Ok(results.into_vec())
}

/// The best trades buying exactly `amount_out` with `currency_in`, best
/// first.
#[instrument(skip_all, fields(currency_in = %currency_in, amount_out = %amount_out))]
pub fn best_trade_exact_out(
    pools: &[Pool],
    currency_in: &Currency,
    amount_out: &Amount,
    options: BestTradeOptions,
    networks: &Networks,
) -> Result<Vec<Trade>, Error> {
    let chain_id = validate(pools, currency_in, amount_out.currency(), &options)?;
    let search = Search {
        networks,
        currency_in,
        currency_out: amount_out.currency(),
        token_out: networks.wrap(currency_in, chain_id)?,
    };
    let mut results = RankedTrades::new(options.max_num_results);
    let candidates = pools.iter().collect::<Vec<_>>();
    search.exact_out(
        &candidates,
        amount_out,
        &networks.wrap_amount(amount_out, chain_id)?,
        &[],
        options.max_hops,
        &mut results,
    )?;
    tracing::debug!(found = results.len(), "best trade exact out");
    Ok(results.into_vec())
}

/// Rejects searches that can never succeed and determines the chain to
/// search on.
fn validate(
    pools: &[Pool],
    currency_in: &Currency,
    currency_out: &Currency,
    options: &BestTradeOptions,
) -> Result<ChainId, Error> {
    if pools.is_empty() {
        return Err(ValidationError::NoPools.into());
    }
    if options.max_hops == 0 {
        return Err(ValidationError::InvalidMaxHops.into());
    }
    let chain_id = currency_in
        .chain_id()
        .or_else(|| currency_out.chain_id())
        .ok_or(ValidationError::UnknownChain)?;
    Ok(chain_id)
}

/// The fixed parameters of one search. Everything that changes while
/// descending is passed by value or borrowed immutably; only the result
/// buffer is mutable and it is owned by the caller.
struct Search<'a> {
    networks: &'a Networks,
    currency_in: &'a Currency,
    currency_out: &'a Currency,
    /// The wrapped token the search walks towards: the output token for
    /// exact input searches and the input token for exact output searches.
    token_out: Token,
}

impl Search<'_> {
    fn exact_in(
        &self,
        pools: &[&Pool],
        original_amount_in: &Amount,
        amount_in: &Amount,
        path: &[Pool],
        max_hops: usize,
        results: &mut RankedTrades,
    ) -> Result<(), Error> {
        let token_in = amount_in.token()?;
        for (i, pool) in pools.iter().enumerate() {
            if !pool.involves_token(token_in) || pool.is_empty() {
                continue;
            }
            let amount_out = match pool.output_for(amount_in) {
                Ok((amount_out, _)) => amount_out,
                Err(err) if err.is_insufficient() => {
                    tracing::trace!(pool = ?pool.address(), ?err, "skipping pool");
                    continue;
                }
                Err(err) => return Err(err),
            };

            let mut next_path = path.to_vec();
            next_path.push((*pool).clone());
            if amount_out.token()? == &self.token_out {
                let route = Route::new(
                    next_path,
                    self.currency_in.clone(),
                    self.currency_out.clone(),
                    self.networks,
                )?;
                match Trade::exact_in(route, original_amount_in) {
                    Ok(trade) => results.insert(trade),
                    Err(err) if err.is_insufficient() => continue,
                    Err(err) => return Err(err),
                }
            } else if max_hops > 1 && pools.len() > 1 {
                let remaining = without(pools, i);
                self.exact_in(
                    &remaining,
                    original_amount_in,
                    &amount_out,
                    &next_path,
                    max_hops - 1,
                    results,
                )?;
            }
        }
        Ok(())
    }

    /// Like [`Search::exact_in`] but walks from the output towards the
    /// input, so `path` is built back to front.
    fn exact_out(
        &self,
        pools: &[&Pool],
        original_amount_out: &Amount,
        amount_out: &Amount,
        path: &[Pool],
        max_hops: usize,
        results: &mut RankedTrades,
    ) -> Result<(), Error> {
        let token_out = amount_out.token()?;
        for (i, pool) in pools.iter().enumerate() {
            if !pool.involves_token(token_out) || pool.is_empty() {
                continue;
            }
            let amount_in = match pool.input_for(amount_out) {
                Ok((amount_in, _)) => amount_in,
                Err(err) if err.is_insufficient() => {
                    tracing::trace!(pool = ?pool.address(), ?err, "skipping pool");
                    continue;
                }
                Err(err) => return Err(err),
            };

            let next_path = std::iter::once((*pool).clone())
                .chain(path.iter().cloned())
                .collect::<Vec<_>>();
            if amount_in.token()? == &self.token_out {
                let route = Route::new(
                    next_path,
                    self.currency_in.clone(),
                    self.currency_out.clone(),
                    self.networks,
                )?;
                match Trade::exact_out(route, original_amount_out) {
                    Ok(trade) => results.insert(trade),
                    Err(err) if err.is_insufficient() => continue,
                    Err(err) => return Err(err),
                }
            } else if max_hops > 1 && pools.len() > 1 {
                let remaining = without(pools, i);
                self.exact_out(
                    &remaining,
                    original_amount_out,
                    &amount_in,
                    &next_path,
                    max_hops - 1,
                    results,
                )?;
            }
        }
        Ok(())
    }
}

fn without<'a>(pools: &[&'a Pool], index: usize) -> Vec<&'a Pool> {
    pools
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, pool)| *pool)
        .collect()
}

/// A sorted buffer keeping at most `capacity` of the best trades seen.
struct RankedTrades {
    capacity: usize,
    trades: Vec<Trade>,
}

impl RankedTrades {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            trades: Vec::with_capacity(capacity),
        }
    }

    fn insert(&mut self, trade: Trade) {
        if self.capacity == 0 {
            return;
        }
        // Trades ranking equal keep their insertion order.
        let index = self
            .trades
            .partition_point(|existing| trade_comparator(existing, &trade) != Ordering::Greater);
        if index >= self.capacity {
            return;
        }
        if self.trades.len() == self.capacity {
            self.trades.pop();
        }
        self.trades.insert(index, trade);
    }

    fn len(&self) -> usize {
        self.trades.len()
    }

    fn into_vec(self) -> Vec<Trade> {
        self.trades
    }
}
