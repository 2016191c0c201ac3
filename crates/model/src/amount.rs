use {
    crate::{Currency, Token, ValidationError},
    alloy_primitives::U256,
    number::{Rational, Rounding, u256_ext::U256Ext},
    num::{BigInt, BigRational},
    std::{
        cmp::Ordering,
        fmt::{self, Display, Formatter},
    },
};

/// A non-negative quantity of a currency in its smallest unit.
///
/// Amounts of different currencies are not comparable: `partial_cmp` returns
/// `None` for them and [`Amount::try_cmp`] reports a currency mismatch.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Amount {
    currency: Currency,
    raw: U256,
}

impl Amount {
    pub fn new(currency: impl Into<Currency>, raw: U256) -> Self {
        Self {
            currency: currency.into(),
            raw,
        }
    }

    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self::new(currency, U256::ZERO)
    }

    /// Truncates a rational quantity of smallest units to an amount.
    pub fn from_rational(
        currency: impl Into<Currency>,
        raw: &Rational,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(currency, u256_from_rational(raw)?))
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn raw(&self) -> U256 {
        self.raw
    }

    /// The token of this amount; pools can not hold native currencies.
    pub fn token(&self) -> Result<&Token, ValidationError> {
        self.currency.as_token().ok_or(ValidationError::NotAToken)
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// The same quantity denominated in another currency. Used when
    /// translating between a native currency and its wrapped token.
    pub fn with_currency(&self, currency: impl Into<Currency>) -> Self {
        Self::new(currency, self.raw)
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, ValidationError> {
        self.ensure_same_currency(other)?;
        let raw = self
            .raw
            .checked_add(other.raw)
            .ok_or(ValidationError::OutOfRange)?;
        Ok(Self::new(self.currency.clone(), raw))
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, ValidationError> {
        self.ensure_same_currency(other)?;
        let raw = self
            .raw
            .checked_sub(other.raw)
            .ok_or(ValidationError::OutOfRange)?;
        Ok(Self::new(self.currency.clone(), raw))
    }

    /// `floor(self * factor)` in the same currency.
    pub fn mul_floor(&self, factor: &Rational) -> Result<Self, ValidationError> {
        Self::from_rational(self.currency.clone(), &(&self.to_rational() * factor))
    }

    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, ValidationError> {
        self.ensure_same_currency(other)?;
        Ok(self.raw.cmp(&other.raw))
    }

    /// The quantity in smallest units.
    pub fn to_rational(&self) -> Rational {
        self.raw.to_rational()
    }

    /// The quantity in whole units of the currency.
    pub fn to_decimal(&self) -> Rational {
        let scale = BigInt::from(10u32).pow(u32::from(self.currency.decimals()));
        Rational::from(BigRational::new(self.raw.to_big_int(), scale))
    }

    /// The exact decimal value without trailing zeros.
    pub fn to_exact(&self) -> String {
        let fixed = self.to_fixed(u32::from(self.currency.decimals()), Rounding::Down);
        if fixed.contains('.') {
            fixed
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            fixed
        }
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.to_decimal().to_fixed(decimal_places, rounding)
    }

    pub fn to_significant(
        &self,
        significant_digits: u32,
        rounding: Rounding,
    ) -> Result<String, number::ArithmeticError> {
        self.to_decimal().to_significant(significant_digits, rounding)
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), ValidationError> {
        if self.currency != other.currency {
            return Err(ValidationError::currency_mismatch(
                &self.currency,
                &other.currency,
            ));
        }
        Ok(())
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.currency)
    }
}

pub(crate) fn u256_from_rational(value: &Rational) -> Result<U256, ValidationError> {
    U256::from_big_rational(value.as_big_rational()).map_err(|_| ValidationError::OutOfRange)
}
