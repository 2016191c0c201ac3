//! Constant product pools.

pub mod pair_provider;

use {
    crate::{
        Error,
        deployment::{Deployment, RouterVariant},
    },
    alloy_primitives::{Address, U256},
    model::{Amount, ChainId, Currency, Price, Token, TokenPair, ValidationError},
    num::{BigInt, Signed, rational::Ratio},
    number::u256_ext::U256Ext,
    std::sync::LazyLock,
};

/// Liquidity tokens permanently locked by the first deposit into a pool.
pub const MINIMUM_LIQUIDITY: u64 = 1000;

/// Pair contracts store their reserves as `uint112`.
static POOL_MAX_RESERVES: LazyLock<U256> = LazyLock::new(|| U256::from((1u128 << 112) - 1));

/// A snapshot of a Uniswap V2 style pair.
///
/// `tokens.0` always sorts before `tokens.1` and `reserves` are in the same
/// order. Pools are never modified; swaps return the post-trade state as a
/// new pool.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Pool {
    address: Address,
    variant: RouterVariant,
    fee: Ratio<u32>,
    tokens: (Token, Token),
    reserves: (U256, U256),
}

impl Pool {
    /// Creates a pool from its two reserves, supplied in any order.
    pub fn new(
        reserve_a: Amount,
        reserve_b: Amount,
        deployment: &Deployment,
    ) -> Result<Self, Error> {
        let token_a = reserve_a.token()?.clone();
        let token_b = reserve_b.token()?.clone();
        let pair = TokenPair::new(token_a.address, token_b.address)
            .ok_or(ValidationError::IdenticalTokens)?;
        let (tokens, reserves) = if token_a.sorts_before(&token_b)? {
            ((token_a, token_b), (reserve_a.raw(), reserve_b.raw()))
        } else {
            ((token_b, token_a), (reserve_b.raw(), reserve_a.raw()))
        };
        if tokens.0.chain_id != deployment.chain_id {
            return Err(ValidationError::ChainMismatch.into());
        }
        if reserves.0 > *POOL_MAX_RESERVES || reserves.1 > *POOL_MAX_RESERVES {
            return Err(Error::ReserveOverflow);
        }

        Ok(Self {
            address: deployment.pair_provider.pair_address(&pair),
            variant: deployment.variant,
            fee: deployment.fee,
            tokens,
            reserves,
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn variant(&self) -> RouterVariant {
        self.variant
    }

    pub fn fee(&self) -> Ratio<u32> {
        self.fee
    }

    pub fn chain_id(&self) -> ChainId {
        self.tokens.0.chain_id
    }

    pub fn token0(&self) -> &Token {
        &self.tokens.0
    }

    pub fn token1(&self) -> &Token {
        &self.tokens.1
    }

    pub fn reserve0(&self) -> Amount {
        Amount::new(self.tokens.0.clone(), self.reserves.0)
    }

    pub fn reserve1(&self) -> Amount {
        Amount::new(self.tokens.1.clone(), self.reserves.1)
    }

    /// Whether either reserve is zero, in which case nothing can be traded.
    pub fn is_empty(&self) -> bool {
        self.reserves.0.is_zero() || self.reserves.1.is_zero()
    }

    pub fn involves_token(&self, token: &Token) -> bool {
        *token == self.tokens.0 || *token == self.tokens.1
    }

    /// The token on the other side of the pool.
    pub fn other_token(&self, token: &Token) -> Result<&Token, Error> {
        Ok(self.relative_reserves(token)?.2)
    }

    pub fn reserve_of(&self, token: &Token) -> Result<Amount, Error> {
        let (reserve, _, _) = self.relative_reserves(token)?;
        Ok(Amount::new(token.clone(), reserve))
    }

    /// The mid price of `token` in terms of the other token.
    pub fn price_of(&self, token: &Token) -> Result<Price, Error> {
        let (reserve, other_reserve, other) = self.relative_reserves(token)?;
        Ok(Price::new(token.clone(), other.clone(), reserve, other_reserve)?)
    }

    pub fn token0_price(&self) -> Result<Price, Error> {
        self.price_of(&self.tokens.0)
    }

    pub fn token1_price(&self) -> Result<Price, Error> {
        self.price_of(&self.tokens.1)
    }

    /// Returns the amount received for selling `input` into the pool along
    /// with the pool state after the swap.
    pub fn output_for(&self, input: &Amount) -> Result<(Amount, Pool), Error> {
        let token_in = input.token()?;
        let (reserve_in, reserve_out, token_out) = self.relative_reserves(token_in)?;
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(Error::InsufficientReserves);
        }

        let amount_in = input.raw();
        let amount_out = self.amount_out(amount_in, reserve_in, reserve_out)?;
        if amount_out.is_zero() {
            return Err(Error::InsufficientInputAmount);
        }
        let next = self.after_swap(token_in, amount_in, amount_out)?;
        Ok((Amount::new(token_out.clone(), amount_out), next))
    }

    /// Returns the amount that has to be sold into the pool to receive
    /// `output` along with the pool state after the swap. The input is
    /// rounded up so the pool never receives less than it requires.
    pub fn input_for(&self, output: &Amount) -> Result<(Amount, Pool), Error> {
        let token_out = output.token()?;
        let (reserve_out, reserve_in, token_in) = self.relative_reserves(token_out)?;
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(Error::InsufficientReserves);
        }

        let amount_out = output.raw();
        if amount_out.is_zero() {
            return Err(Error::InsufficientOutputAmount);
        }
        if amount_out >= reserve_out {
            return Err(Error::InsufficientLiquidity);
        }
        let amount_in = self.amount_in(amount_out, reserve_in, reserve_out)?;
        let next = self.after_swap(token_in, amount_in, amount_out)?;
        Ok((Amount::new(token_in.clone(), amount_in), next))
    }

    /// The ERC20 token representing shares of the pool.
    pub fn liquidity_token(&self) -> Token {
        Token::new(self.chain_id(), self.address, 18)
            .with_symbol("LP")
            .with_name(format!("{} LP", self.variant))
    }

    /// Liquidity tokens minted for depositing `amount_a` and `amount_b` when
    /// `total_supply` liquidity tokens are outstanding.
    pub fn liquidity_minted(
        &self,
        total_supply: &Amount,
        amount_a: &Amount,
        amount_b: &Amount,
    ) -> Result<Amount, Error> {
        let liquidity_token = self.ensure_liquidity_token(total_supply)?;
        let (amount0, amount1) = self.sort_amounts(amount_a, amount_b)?;
        let amount0 = amount0.raw().to_big_int();
        let amount1 = amount1.raw().to_big_int();

        let liquidity = if total_supply.is_zero() {
            (&amount0 * &amount1).sqrt() - BigInt::from(MINIMUM_LIQUIDITY)
        } else {
            if self.is_empty() {
                return Err(Error::InsufficientReserves);
            }
            let supply = total_supply.raw().to_big_int();
            let liquidity0 = amount0 * &supply / self.reserves.0.to_big_int();
            let liquidity1 = amount1 * &supply / self.reserves.1.to_big_int();
            liquidity0.min(liquidity1)
        };
        if !liquidity.is_positive() {
            return Err(Error::InsufficientInputAmount);
        }

        Ok(Amount::new(liquidity_token, to_u256(&liquidity)?))
    }

    /// The amount of `token` redeemable for `liquidity` pool shares.
    pub fn liquidity_value(
        &self,
        token: &Token,
        total_supply: &Amount,
        liquidity: &Amount,
    ) -> Result<Amount, Error> {
        self.ensure_liquidity_token(total_supply)?;
        self.ensure_liquidity_token(liquidity)?;
        if liquidity.raw() > total_supply.raw() {
            return Err(ValidationError::ExcessLiquidity.into());
        }
        if total_supply.is_zero() {
            return Err(number::ArithmeticError::DivisionByZero.into());
        }

        let reserve = self.reserve_of(token)?;
        let value = liquidity.raw().to_big_int() * reserve.raw().to_big_int()
            / total_supply.raw().to_big_int();
        Ok(Amount::new(token.clone(), to_u256(&value)?))
    }

    /// Splits the desired deposit into the largest amounts matching the
    /// current reserve ratio, in `(token0, token1)` order. An empty pool
    /// accepts any ratio.
    pub fn deposit_amounts(
        &self,
        desired_a: &Amount,
        desired_b: &Amount,
    ) -> Result<(Amount, Amount), Error> {
        let (desired0, desired1) = self.sort_amounts(desired_a, desired_b)?;
        if self.reserves.0.is_zero() && self.reserves.1.is_zero() {
            return Ok((desired0.clone(), desired1.clone()));
        }
        if self.is_empty() {
            return Err(Error::InsufficientReserves);
        }

        let (reserve0, reserve1) = (self.reserves.0.to_big_int(), self.reserves.1.to_big_int());
        let optimal1 = desired0.raw().to_big_int() * &reserve1 / &reserve0;
        if optimal1 <= desired1.raw().to_big_int() {
            return Ok((desired0.clone(), Amount::new(self.tokens.1.clone(), to_u256(&optimal1)?)));
        }
        let optimal0 = desired1.raw().to_big_int() * reserve0 / reserve1;
        Ok((Amount::new(self.tokens.0.clone(), to_u256(&optimal0)?), desired1.clone()))
    }

    /// Given one of the pool's two tokens, returns
    /// - the pool's reserve of the token provided
    /// - the reserve of the other token
    /// - the other token
    fn relative_reserves(&self, token: &Token) -> Result<(U256, U256, &Token), Error> {
        if *token == self.tokens.0 {
            Ok((self.reserves.0, self.reserves.1, &self.tokens.1))
        } else if *token == self.tokens.1 {
            Ok((self.reserves.1, self.reserves.0, &self.tokens.0))
        } else {
            Err(ValidationError::TokenNotInPool.into())
        }
    }

    /// The share of the input amount that remains after the fee, as a
    /// numerator over `fee.denom()`.
    fn fee_complement(&self) -> Result<U256, Error> {
        self.fee
            .denom()
            .checked_sub(*self.fee.numer())
            .filter(|complement| *complement > 0)
            .map(U256::from)
            .ok_or(Error::InsufficientInputAmount)
    }

    fn amount_out(
        &self,
        amount_in: U256,
        reserve_in: U256,
        reserve_out: U256,
    ) -> Result<U256, Error> {
        // Reserves are bounded by 112 bits and the fee denominator by 32 bits,
        // so the products only overflow for inputs that exceed the reserve
        // limit anyway.
        let amount_in_with_fee = amount_in
            .checked_mul(self.fee_complement()?)
            .ok_or(Error::ReserveOverflow)?;
        let numerator = amount_in_with_fee
            .checked_mul(reserve_out)
            .ok_or(Error::ReserveOverflow)?;
        let denominator = reserve_in
            .checked_mul(U256::from(*self.fee.denom()))
            .and_then(|reserve| reserve.checked_add(amount_in_with_fee))
            .ok_or(Error::ReserveOverflow)?;
        Ok(numerator / denominator)
    }

    fn amount_in(
        &self,
        amount_out: U256,
        reserve_in: U256,
        reserve_out: U256,
    ) -> Result<U256, Error> {
        let numerator = reserve_in
            .checked_mul(amount_out)
            .and_then(|product| product.checked_mul(U256::from(*self.fee.denom())))
            .ok_or(Error::ReserveOverflow)?;
        let denominator = (reserve_out - amount_out)
            .checked_mul(self.fee_complement()?)
            .ok_or(Error::ReserveOverflow)?;
        numerator
            .checked_ceil_div(&denominator)
            .ok_or(Error::ReserveOverflow)
    }

    fn after_swap(
        &self,
        token_in: &Token,
        amount_in: U256,
        amount_out: U256,
    ) -> Result<Pool, Error> {
        let (reserve_in, reserve_out, _) = self.relative_reserves(token_in)?;
        let (final_in, final_out) =
            check_final_reserves(amount_in, amount_out, reserve_in, reserve_out)?;
        let reserves = if *token_in == self.tokens.0 {
            (final_in, final_out)
        } else {
            (final_out, final_in)
        };
        Ok(Self {
            reserves,
            ..self.clone()
        })
    }

    fn ensure_liquidity_token(&self, amount: &Amount) -> Result<Token, Error> {
        let liquidity_token = self.liquidity_token();
        let expected = Currency::from(liquidity_token.clone());
        if *amount.currency() != expected {
            return Err(ValidationError::currency_mismatch(&expected, amount.currency()).into());
        }
        Ok(liquidity_token)
    }

    /// Orders two amounts of the pool's tokens as `(token0, token1)`.
    fn sort_amounts<'a>(
        &self,
        amount_a: &'a Amount,
        amount_b: &'a Amount,
    ) -> Result<(&'a Amount, &'a Amount), Error> {
        let (token_a, token_b) = (amount_a.token()?, amount_b.token()?);
        if *token_a == self.tokens.0 && *token_b == self.tokens.1 {
            Ok((amount_a, amount_b))
        } else if *token_a == self.tokens.1 && *token_b == self.tokens.0 {
            Ok((amount_b, amount_a))
        } else if token_a == token_b {
            Err(ValidationError::IdenticalTokens.into())
        } else {
            Err(ValidationError::TokenNotInPool.into())
        }
    }
}

fn check_final_reserves(
    amount_in: U256,
    amount_out: U256,
    reserve_in: U256,
    reserve_out: U256,
) -> Result<(U256, U256), Error> {
    let final_reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(Error::ReserveOverflow)?;
    let final_reserve_out = reserve_out
        .checked_sub(amount_out)
        .ok_or(Error::InsufficientLiquidity)?;

    if final_reserve_in > *POOL_MAX_RESERVES {
        Err(Error::ReserveOverflow)
    } else {
        Ok((final_reserve_in, final_reserve_out))
    }
}

fn to_u256(value: &BigInt) -> Result<U256, ValidationError> {
    U256::from_big_int(value).map_err(|_| ValidationError::OutOfRange)
}

#[cfg(test)]
pub(crate) mod tests {
    use {super::*, crate::Deployments};

    pub fn token(byte: u8) -> Token {
        Token::new(ChainId::MAINNET, Address::with_last_byte(byte), 18)
    }

    pub fn uniswap() -> Deployment {
        *Deployments::builtin()
            .get(ChainId::MAINNET, RouterVariant::Uniswap)
            .unwrap()
    }

    pub fn uniswap_pool(a: &Token, reserve_a: u128, b: &Token, reserve_b: u128) -> Pool {
        Pool::new(
            Amount::new(a.clone(), U256::from(reserve_a)),
            Amount::new(b.clone(), U256::from(reserve_b)),
            &uniswap(),
        )
        .unwrap()
    }

    fn amount(token: &Token, raw: u128) -> Amount {
        Amount::new(token.clone(), U256::from(raw))
    }

    fn out(pool: &Pool, input: &Amount) -> Result<U256, Error> {
        pool.output_for(input).map(|(amount, _)| amount.raw())
    }

    fn inp(pool: &Pool, output: &Amount) -> Result<U256, Error> {
        pool.input_for(output).map(|(amount, _)| amount.raw())
    }

    #[test]
    fn test_get_amounts_out() {
        let sell_token = token(1);
        let buy_token = token(2);

        // Even Pool
        let pool = uniswap_pool(&sell_token, 100, &buy_token, 100);
        assert_eq!(out(&pool, &amount(&sell_token, 10)), Ok(U256::from(9)));
        assert_eq!(out(&pool, &amount(&sell_token, 100)), Ok(U256::from(49)));
        assert_eq!(out(&pool, &amount(&sell_token, 1000)), Ok(U256::from(90)));

        //Uneven Pool
        let pool = uniswap_pool(&sell_token, 200, &buy_token, 50);
        assert_eq!(out(&pool, &amount(&sell_token, 10)), Ok(U256::from(2)));
        assert_eq!(out(&pool, &amount(&sell_token, 100)), Ok(U256::from(16)));
        assert_eq!(out(&pool, &amount(&sell_token, 1000)), Ok(U256::from(41)));

        // Large Numbers
        let pool = uniswap_pool(&sell_token, 1u128 << 90, &buy_token, 1u128 << 90);
        assert_eq!(
            out(&pool, &amount(&sell_token, 10u128.pow(20))),
            Ok(U256::from(99_699_991_970_459_889_807u128))
        );

        // Overflow
        assert_eq!(
            out(&pool, &Amount::new(sell_token.clone(), U256::MAX)),
            Err(Error::ReserveOverflow)
        );
    }

    #[test]
    fn test_get_amounts_in() {
        let sell_token = token(1);
        let buy_token = token(2);

        // Even Pool
        let pool = uniswap_pool(&sell_token, 100, &buy_token, 100);
        assert_eq!(inp(&pool, &amount(&buy_token, 10)), Ok(U256::from(12)));
        assert_eq!(inp(&pool, &amount(&buy_token, 99)), Ok(U256::from(9930)));

        // Buying more than possible
        assert_eq!(
            inp(&pool, &amount(&buy_token, 100)),
            Err(Error::InsufficientLiquidity)
        );
        assert_eq!(
            inp(&pool, &amount(&buy_token, 1000)),
            Err(Error::InsufficientLiquidity)
        );

        // Buying nothing
        assert_eq!(
            inp(&pool, &amount(&buy_token, 0)),
            Err(Error::InsufficientOutputAmount)
        );

        //Uneven Pool
        let pool = uniswap_pool(&sell_token, 200, &buy_token, 50);
        assert_eq!(inp(&pool, &amount(&buy_token, 10)), Ok(U256::from(51)));
        assert_eq!(inp(&pool, &amount(&buy_token, 49)), Ok(U256::from(9830)));

        // Large Numbers
        let pool = uniswap_pool(&sell_token, 1u128 << 90, &buy_token, 1u128 << 90);
        assert_eq!(
            inp(&pool, &amount(&buy_token, 10u128.pow(20))),
            Ok(U256::from(100_300_910_810_367_424_267u128)),
        );
    }

    #[test]
    fn worked_example() {
        let (a, b) = (token(1), token(2));
        let pool = uniswap_pool(&a, 100, &b, 101);
        let (output, next) = pool.output_for(&amount(&a, 10)).unwrap();
        // floor(10 * 997 * 101 / (100 * 1000 + 10 * 997)) = floor(1006970 / 109970)
        assert_eq!(output, amount(&b, 9));
        assert_eq!(next.reserve0(), amount(&a, 110));
        assert_eq!(next.reserve1(), amount(&b, 92));
        assert_eq!(next.address(), pool.address());
        // The original is untouched.
        assert_eq!(pool.reserve0(), amount(&a, 100));
    }

    #[test]
    fn canonical_token_order() {
        let (a, b) = (token(1), token(2));
        let forward = uniswap_pool(&a, 100, &b, 200);
        let backward = uniswap_pool(&b, 200, &a, 100);
        assert_eq!(forward, backward);
        assert_eq!(forward.token0(), &a);
        assert_eq!(backward.reserve0(), amount(&a, 100));
    }

    #[test]
    fn construction_errors() {
        let a = token(1);
        let err = Pool::new(amount(&a, 1), amount(&a, 1), &uniswap()).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::IdenticalTokens));

        let other_chain = Token::new(ChainId::BNB, Address::with_last_byte(2), 18);
        let err = Pool::new(amount(&a, 1), amount(&other_chain, 1), &uniswap()).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::ChainMismatch));

        let err =
            Pool::new(amount(&a, 1u128 << 112), amount(&token(2), 1), &uniswap()).unwrap_err();
        assert_eq!(err, Error::ReserveOverflow);

        // Both tokens live on BNB chain but the deployment is on mainnet.
        let wbnb = Token::new(ChainId::BNB, testlib::tokens::WBNB, 18);
        let banana = Token::new(ChainId::BNB, testlib::tokens::BANANA, 18);
        let err = Pool::new(amount(&wbnb, 1), amount(&banana, 1), &uniswap()).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::ChainMismatch));

        let native = Amount::new(model::NativeCurrency::ether(), U256::from(1));
        let err = Pool::new(native, amount(&a, 1), &uniswap()).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::NotAToken));
    }

    #[test]
    fn swap_errors() {
        let (a, b, c) = (token(1), token(2), token(3));
        let pool = uniswap_pool(&a, 100, &b, 100);
        assert_eq!(
            out(&pool, &amount(&c, 10)),
            Err(Error::Validation(ValidationError::TokenNotInPool))
        );
        assert_eq!(out(&pool, &amount(&a, 1)), Err(Error::InsufficientInputAmount));
        assert_eq!(out(&pool, &amount(&a, 0)), Err(Error::InsufficientInputAmount));

        let empty = uniswap_pool(&a, 0, &b, 100);
        assert!(empty.is_empty());
        assert_eq!(out(&empty, &amount(&a, 10)), Err(Error::InsufficientReserves));
        assert_eq!(inp(&empty, &amount(&b, 10)), Err(Error::InsufficientReserves));
    }

    #[test]
    fn final_reserve_limits() {
        assert_eq!(
            check_final_reserves(
                U256::ONE,
                U256::from(2),
                U256::from(1_000_000),
                U256::from(2_000_000),
            ),
            Ok((U256::from(1_000_001), U256::from(1_999_998))),
        );
        // final out reserve too low
        assert_eq!(
            check_final_reserves(U256::ZERO, U256::ONE, U256::from(1_000_000), U256::ZERO),
            Err(Error::InsufficientLiquidity)
        );
        // final in reserve too high
        assert_eq!(
            check_final_reserves(
                U256::ONE,
                U256::ZERO,
                *POOL_MAX_RESERVES,
                U256::from(1_000_000)
            ),
            Err(Error::ReserveOverflow)
        );
    }

    #[test]
    fn input_for_output_never_exceeds_original_input() {
        let (a, b) = (token(1), token(2));
        let pool = uniswap_pool(&a, 1_000_000, &b, 3_000_000);
        for input in [1_000u128, 12_345, 99_999, 500_000] {
            let input = amount(&a, input);
            let (output, _) = pool.output_for(&input).unwrap();
            let (required, _) = pool.input_for(&output).unwrap();
            assert!(required.raw() <= input.raw());
        }
    }

    #[test]
    fn fee_depends_on_deployment() {
        let (a, b) = (token(1), token(2));
        let mut ape = uniswap();
        ape.variant = RouterVariant::ApeSwap;
        ape.fee = RouterVariant::ApeSwap.default_fee();
        let pool = Pool::new(amount(&a, 1_000_000), amount(&b, 1_000_000), &ape).unwrap();
        // 10000 * 998 * 1000000 / (1000000 * 1000 + 10000 * 998)
        assert_eq!(out(&pool, &amount(&a, 10_000)), Ok(U256::from(9881)));
    }

    #[test]
    fn prices() {
        let dai = Token::new(ChainId::MAINNET, testlib::tokens::DAI, 18);
        let usdc = Token::new(ChainId::MAINNET, testlib::tokens::USDC, 6);
        let pool = Pool::new(
            Amount::new(usdc.clone(), U256::from(2_000_000u64)),
            Amount::new(dai.clone(), U256::from(10u64.pow(18))),
            &uniswap(),
        )
        .unwrap();
        assert_eq!(
            pool.address(),
            alloy_primitives::address!("AE461cA67B15dc8dc81CE7615e0320dA1A9aB8D5")
        );
        assert_eq!(pool.token0(), &dai);
        assert_eq!(
            pool.token0_price().unwrap().adjusted(),
            number::Rational::from_integer(2)
        );
        assert_eq!(
            pool.price_of(&usdc).unwrap(),
            pool.token1_price().unwrap()
        );
        assert_eq!(
            pool.token1_price().unwrap().adjusted(),
            number::Rational::new(1, 2).unwrap()
        );
        assert_eq!(
            pool.price_of(&token(9)),
            Err(Error::Validation(ValidationError::TokenNotInPool))
        );
        assert_eq!(pool.reserve_of(&usdc).unwrap().raw(), U256::from(2_000_000u64));
    }

    #[test]
    fn liquidity() {
        let (a, b) = (token(1), token(2));
        let empty = uniswap_pool(&a, 0, &b, 0);
        let lp = empty.liquidity_token();
        assert_eq!(lp.address, empty.address());

        let minted = empty
            .liquidity_minted(&Amount::zero(lp.clone()), &amount(&a, 10_000), &amount(&b, 40_000))
            .unwrap();
        assert_eq!(minted, amount(&lp, 20_000 - 1000));

        assert_eq!(
            empty.liquidity_minted(&Amount::zero(lp.clone()), &amount(&a, 10), &amount(&b, 10)),
            Err(Error::InsufficientInputAmount)
        );

        let pool = uniswap_pool(&a, 10_000, &b, 40_000);
        let supply = amount(&lp, 20_000);
        let minted = pool
            .liquidity_minted(&supply, &amount(&b, 4_000), &amount(&a, 2_000))
            .unwrap();
        assert_eq!(minted, amount(&lp, 2_000));

        assert_eq!(
            pool.liquidity_value(&a, &supply, &amount(&lp, 5_000)),
            Ok(amount(&a, 2_500))
        );
        assert_eq!(
            pool.liquidity_value(&b, &supply, &amount(&lp, 20_001)),
            Err(Error::Validation(ValidationError::ExcessLiquidity))
        );
        assert!(matches!(
            pool.liquidity_minted(&amount(&a, 1), &amount(&a, 1), &amount(&b, 1)),
            Err(Error::Validation(ValidationError::CurrencyMismatch { .. }))
        ));
    }

    #[test]
    fn deposit_amounts_follow_reserve_ratio() {
        let (a, b) = (token(1), token(2));
        let pool = uniswap_pool(&a, 1_000, &b, 4_000);
        assert_eq!(
            pool.deposit_amounts(&amount(&a, 10), &amount(&b, 100)),
            Ok((amount(&a, 10), amount(&b, 40)))
        );
        assert_eq!(
            pool.deposit_amounts(&amount(&b, 20), &amount(&a, 10)),
            Ok((amount(&a, 5), amount(&b, 20)))
        );
        let empty = uniswap_pool(&a, 0, &b, 0);
        assert_eq!(
            empty.deposit_amounts(&amount(&a, 3), &amount(&b, 7)),
            Ok((amount(&a, 3), amount(&b, 7)))
        );
    }
}
