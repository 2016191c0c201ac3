use {
    crate::{Amount, Currency, Error, ValidationError, amount::u256_from_rational},
    alloy_primitives::U256,
    number::{ArithmeticError, Rational, Rounding, u256_ext::U256Ext},
    num::BigInt,
    std::fmt::{self, Display, Formatter},
};

/// How many smallest units of `quote` one smallest unit of `base` is worth.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Price {
    base: Currency,
    quote: Currency,
    raw: Rational,
}

impl Price {
    /// The price at which `base_amount` of `base` trades for `quote_amount`
    /// of `quote`.
    pub fn new(
        base: impl Into<Currency>,
        quote: impl Into<Currency>,
        base_amount: U256,
        quote_amount: U256,
    ) -> Result<Self, ArithmeticError> {
        Ok(Self {
            base: base.into(),
            quote: quote.into(),
            raw: Rational::new(quote_amount.to_big_int(), base_amount.to_big_int())?,
        })
    }

    pub fn from_raw(base: impl Into<Currency>, quote: impl Into<Currency>, raw: Rational) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
            raw,
        }
    }

    pub fn from_amounts(base: &Amount, quote: &Amount) -> Result<Self, ArithmeticError> {
        Self::new(
            base.currency().clone(),
            quote.currency().clone(),
            base.raw(),
            quote.raw(),
        )
    }

    pub fn base_currency(&self) -> &Currency {
        &self.base
    }

    pub fn quote_currency(&self) -> &Currency {
        &self.quote
    }

    /// The ratio of smallest units.
    pub fn raw(&self) -> &Rational {
        &self.raw
    }

    /// The ratio of whole units, i.e. the raw ratio corrected for the
    /// difference in decimals.
    pub fn adjusted(&self) -> Rational {
        let pow10 = |decimals: u8| BigInt::from(10u32).pow(u32::from(decimals));
        let scalar = Rational::new(pow10(self.base.decimals()), pow10(self.quote.decimals()))
            .expect("powers of ten are never zero");
        &self.raw * &scalar
    }

    pub fn invert(&self) -> Result<Self, ArithmeticError> {
        Ok(Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
            raw: self.raw.invert()?,
        })
    }

    /// Chains two prices: `A/B * B/C = A/C`.
    pub fn multiply(&self, other: &Self) -> Result<Self, ValidationError> {
        if self.quote != other.base {
            return Err(ValidationError::currency_mismatch(&self.quote, &other.base));
        }
        Ok(Self {
            base: self.base.clone(),
            quote: other.quote.clone(),
            raw: &self.raw * &other.raw,
        })
    }

    /// Converts an amount of the base currency into the quote currency,
    /// truncating to whole smallest units.
    pub fn quote(&self, amount: &Amount) -> Result<Amount, Error> {
        if *amount.currency() != self.base {
            return Err(ValidationError::currency_mismatch(&self.base, amount.currency()).into());
        }
        let raw = u256_from_rational(&(&self.raw * &amount.to_rational()))?;
        Ok(Amount::new(self.quote.clone(), raw))
    }

    pub fn to_significant(
        &self,
        significant_digits: u32,
        rounding: Rounding,
    ) -> Result<String, ArithmeticError> {
        self.adjusted().to_significant(significant_digits, rounding)
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.adjusted().to_fixed(decimal_places, rounding)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let value = self
            .to_significant(6, Rounding::HalfUp)
            .map_err(|_| fmt::Error)?;
        write!(f, "{value} {}/{}", self.quote, self.base)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{ChainId, Token},
    };

    fn token(address: alloy_primitives::Address, decimals: u8, symbol: &str) -> Token {
        Token::new(ChainId::MAINNET, address, decimals).with_symbol(symbol)
    }

    fn dai() -> Token {
        token(testlib::tokens::DAI, 18, "DAI")
    }

    fn usdc() -> Token {
        token(testlib::tokens::USDC, 6, "USDC")
    }

    fn weth() -> Token {
        token(testlib::tokens::WETH, 18, "WETH")
    }

    #[test]
    fn rejects_zero_base_amount() {
        assert_eq!(
            Price::new(dai(), usdc(), U256::ZERO, U256::from(1)),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn adjusts_for_decimals() {
        // 1 DAI (18 decimals) for 2 USDC (6 decimals).
        let price = Price::new(
            dai(),
            usdc(),
            U256::from(10u64.pow(18)),
            U256::from(2_000_000u64),
        )
        .unwrap();
        assert_eq!(price.adjusted(), Rational::from_integer(2));
        assert_eq!(price.to_fixed(2, Rounding::Down), "2.00");
        assert_eq!(price.to_string(), "2 USDC/DAI");
    }

    #[test]
    fn quotes_base_amounts() {
        let price = Price::new(dai(), usdc(), U256::from(3), U256::from(7)).unwrap();
        let quoted = price.quote(&Amount::new(dai(), U256::from(10))).unwrap();
        assert_eq!(quoted.currency(), &Currency::from(usdc()));
        assert_eq!(quoted.raw(), U256::from(23));

        assert!(matches!(
            price.quote(&Amount::new(usdc(), U256::from(10))),
            Err(Error::Validation(ValidationError::CurrencyMismatch { .. }))
        ));
    }

    #[test]
    fn multiply_chains_currencies() {
        let dai_usdc = Price::new(dai(), usdc(), U256::from(1), U256::from(2)).unwrap();
        let usdc_weth = Price::new(usdc(), weth(), U256::from(5), U256::from(3)).unwrap();
        let dai_weth = dai_usdc.multiply(&usdc_weth).unwrap();
        assert_eq!(dai_weth.base_currency(), &Currency::from(dai()));
        assert_eq!(dai_weth.quote_currency(), &Currency::from(weth()));
        assert_eq!(dai_weth.raw(), &Rational::new(6, 5).unwrap());

        assert!(usdc_weth.multiply(&dai_usdc).is_err());
    }

    #[test]
    fn invert_swaps_currencies() {
        let price = Price::new(dai(), usdc(), U256::from(4), U256::from(2)).unwrap();
        let inverted = price.invert().unwrap();
        assert_eq!(inverted.base_currency(), &Currency::from(usdc()));
        assert_eq!(inverted.raw(), &Rational::from_integer(2));
        assert_eq!(inverted.invert().unwrap(), price);
    }
}
