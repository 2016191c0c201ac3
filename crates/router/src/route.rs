use {
    crate::{Error, pool::Pool},
    itertools::Itertools,
    model::{ChainId, Currency, Networks, Price, Token, ValidationError},
    std::fmt::{self, Display, Formatter},
};

/// A validated chain of pools leading from an input to an output currency.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Route {
    pools: Vec<Pool>,
    /// The tokens visited, starting with the wrapped input and ending with
    /// the wrapped output. Always one longer than `pools`.
    path: Vec<Token>,
    input: Currency,
    output: Currency,
}

impl Route {
    pub fn new(
        pools: Vec<Pool>,
        input: Currency,
        output: Currency,
        networks: &Networks,
    ) -> Result<Self, Error> {
        let Some(first) = pools.first() else {
            return Err(ValidationError::EmptyRoute.into());
        };
        let chain_id = first.chain_id();
        if pools.iter().any(|pool| pool.chain_id() != chain_id) {
            return Err(ValidationError::ChainMismatch.into());
        }

        let wrapped_input = networks.wrap(&input, chain_id)?;
        if !first.involves_token(&wrapped_input) {
            return Err(ValidationError::InputNotInRoute.into());
        }
        let wrapped_output = networks.wrap(&output, chain_id)?;

        let mut path = Vec::with_capacity(pools.len() + 1);
        let mut frontier = wrapped_input;
        for pool in &pools {
            if !pool.involves_token(&frontier) {
                return Err(ValidationError::DiscontinuousRoute.into());
            }
            let next = pool.other_token(&frontier)?.clone();
            path.push(std::mem::replace(&mut frontier, next));
        }
        path.push(frontier);
        if path.last() != Some(&wrapped_output) {
            return Err(ValidationError::OutputNotInRoute.into());
        }

        Ok(Self {
            pools,
            path,
            input,
            output,
        })
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn path(&self) -> &[Token] {
        &self.path
    }

    pub fn input(&self) -> &Currency {
        &self.input
    }

    pub fn output(&self) -> &Currency {
        &self.output
    }

    pub fn chain_id(&self) -> ChainId {
        self.pools[0].chain_id()
    }

    pub fn hops(&self) -> usize {
        self.pools.len()
    }

    /// The token actually sold into the first pool.
    pub fn wrapped_input(&self) -> &Token {
        &self.path[0]
    }

    /// The token actually bought from the last pool.
    pub fn wrapped_output(&self) -> &Token {
        &self.path[self.path.len() - 1]
    }

    /// The exchange rate along the whole route for an infinitesimally small
    /// trade.
    pub fn mid_price(&self) -> Result<Price, Error> {
        let mut price = self.pools[0].price_of(&self.path[0])?;
        for (pool, token) in self.pools.iter().zip(&self.path).skip(1) {
            price = price.multiply(&pool.price_of(token)?)?;
        }
        Ok(Price::from_raw(
            self.input.clone(),
            self.output.clone(),
            price.raw().clone(),
        ))
    }

    /// The same route over a different state of its pools. Used for the
    /// post-trade pools, which keep their tokens.
    pub(crate) fn with_pools(&self, pools: Vec<Pool>) -> Self {
        debug_assert_eq!(pools.len(), self.pools.len());
        Self {
            pools,
            ..self.clone()
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.path.iter().join(" -> "))
    }
}
