//! Arbitrary precision fractions.
//!
//! All arithmetic is exact. The only place where precision is given up is
//! when rendering a value as a decimal string, and the rounding mode has to
//! be passed explicitly there.

use {
    num::{BigInt, BigRational, Integer, One, Signed, Zero},
    std::{
        fmt::{self, Display, Formatter},
        ops::{Add, Mul, Neg, Sub},
    },
    thiserror::Error,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("formatting requires at least one significant digit")]
    ZeroSignificantDigits,
}

/// How to round the magnitude of a value when it can not be represented
/// exactly with the requested number of digits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Rounding {
    /// Towards zero.
    Down,
    /// To the nearest neighbour, away from zero when both are equally near.
    HalfUp,
    /// Away from zero.
    Up,
}

/// An exact fraction with arbitrary precision numerator and denominator.
///
/// The value is always kept normalized, so two rationals representing the
/// same number compare and hash equal.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rational(BigRational);

impl Rational {
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, ArithmeticError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self(BigRational::new(numerator.into(), denominator)))
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn as_big_rational(&self) -> &BigRational {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self(&self.0 / &other.0))
    }

    pub fn invert(&self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self(self.0.recip()))
    }

    /// Integer division of the numerator by the denominator, truncating
    /// towards zero.
    pub fn quotient(&self) -> BigInt {
        self.0.numer() / self.0.denom()
    }

    /// What is left over after taking the [`Rational::quotient`].
    pub fn remainder(&self) -> Self {
        Self(BigRational::new(
            self.0.numer() % self.0.denom(),
            self.0.denom().clone(),
        ))
    }

    /// Formats the value with exactly `decimal_places` fractional digits.
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        let scaled = &self.0 * BigRational::from_integer(pow10(decimal_places));
        format_scaled(&round_to_integer(&scaled, rounding), decimal_places)
    }

    /// Formats the value with at most `significant_digits` significant
    /// digits. Trailing fractional zeros are dropped.
    pub fn to_significant(
        &self,
        significant_digits: u32,
        rounding: Rounding,
    ) -> Result<String, ArithmeticError> {
        if significant_digits == 0 {
            return Err(ArithmeticError::ZeroSignificantDigits);
        }
        if self.is_zero() {
            return Ok("0".to_string());
        }

        let magnitude = self.0.abs();
        let exponent = decimal_exponent(&magnitude);
        let mut shift = i64::from(significant_digits) - 1 - exponent;
        let mut digits = round_to_integer(&(magnitude * pow10_signed(shift)), rounding);
        // Rounding up may carry into an additional digit (e.g. 9.99 -> 10.0).
        if digits >= pow10(significant_digits) {
            digits /= 10u32;
            shift -= 1;
        }

        let body = if shift <= 0 {
            format!("{digits}{}", "0".repeat(exponent_to_usize(-shift)))
        } else {
            let fixed = format_scaled(&digits, exponent_to_u32(shift));
            fixed
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        };
        let sign = if self.is_negative() { "-" } else { "" };
        Ok(format!("{sign}{body}"))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<Rational> for BigRational {
    fn from(value: Rational) -> Self {
        value.0
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl $trait for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational(self.0.$method(rhs.0))
            }
        }

        impl $trait<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational((&self.0).$method(&rhs.0))
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

fn pow10_signed(exponent: i64) -> BigRational {
    let power = BigRational::from_integer(pow10(exponent_to_u32(exponent.abs())));
    if exponent < 0 { power.recip() } else { power }
}

fn exponent_to_u32(exponent: i64) -> u32 {
    u32::try_from(exponent).expect("decimal exponent out of range")
}

fn exponent_to_usize(exponent: i64) -> usize {
    usize::try_from(exponent).expect("decimal exponent out of range")
}

/// Returns `e` such that `10^e <= value < 10^(e + 1)`. `value` must be
/// positive.
fn decimal_exponent(value: &BigRational) -> i64 {
    let digits = |n: &BigInt| i64::try_from(n.magnitude().to_string().len()).unwrap_or(i64::MAX);
    let mut exponent = digits(value.numer()) - digits(value.denom());
    while pow10_signed(exponent) > *value {
        exponent -= 1;
    }
    while pow10_signed(exponent + 1) <= *value {
        exponent += 1;
    }
    exponent
}

fn round_to_integer(value: &BigRational, rounding: Rounding) -> BigInt {
    // The denominator of a normalized ratio is always positive.
    let (quotient, remainder) = value.numer().div_rem(value.denom());
    if remainder.is_zero() {
        return quotient;
    }
    let away_from_zero = match rounding {
        Rounding::Down => false,
        Rounding::Up => true,
        Rounding::HalfUp => remainder.abs() * 2u32 >= *value.denom(),
    };
    match (away_from_zero, value.is_negative()) {
        (false, _) => quotient,
        (true, false) => quotient + 1u32,
        (true, true) => quotient - 1u32,
    }
}

/// Renders `value / 10^decimal_places` as a decimal string.
fn format_scaled(value: &BigInt, decimal_places: u32) -> String {
    let sign = if value.is_negative() { "-" } else { "" };
    let digits = value.magnitude().to_string();
    if decimal_places == 0 {
        return format!("{sign}{digits}");
    }
    let places = usize::try_from(decimal_places).expect("decimal places fit in usize");
    let digits = format!("{digits:0>width$}", width = places + 1);
    let (integer, fraction) = digits.split_at(digits.len() - places);
    format!("{sign}{integer}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rational(numerator: i64, denominator: i64) -> Rational {
        Rational::new(numerator, denominator).unwrap()
    }

    #[test]
    fn rejects_zero_denominator() {
        assert_eq!(Rational::new(1, 0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(
            rational(1, 2).checked_div(&Rational::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(Rational::zero().invert(), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn arithmetic_is_exact() {
        let a = rational(1, 3);
        let b = rational(2, 7);
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&a * &b, rational(2, 21));
        assert_eq!(a.checked_div(&b).unwrap(), rational(7, 6));
        assert_eq!(b.invert().unwrap(), rational(7, 2));
        assert_eq!(-a.clone(), rational(-1, 3));
        assert!(a > b);
    }

    #[test]
    fn normalizes_equal_values() {
        assert_eq!(rational(2, 4), rational(1, 2));
        assert_eq!(rational(1, -2), rational(-1, 2));
    }

    #[test]
    fn quotient_truncates_towards_zero() {
        assert_eq!(rational(8, 3).quotient(), BigInt::from(2));
        assert_eq!(rational(-8, 3).quotient(), BigInt::from(-2));
        assert_eq!(rational(8, 3).remainder(), rational(2, 3));
        assert_eq!(rational(12, 4).quotient(), BigInt::from(3));
    }

    #[test]
    fn to_fixed_rounds_as_requested() {
        let two_thirds = rational(2, 3);
        assert_eq!(two_thirds.to_fixed(2, Rounding::Down), "0.66");
        assert_eq!(two_thirds.to_fixed(2, Rounding::HalfUp), "0.67");
        assert_eq!(two_thirds.to_fixed(2, Rounding::Up), "0.67");
        assert_eq!(rational(1, 8).to_fixed(2, Rounding::HalfUp), "0.13");
        assert_eq!(rational(1, 8).to_fixed(2, Rounding::Down), "0.12");
        assert_eq!(rational(-1, 8).to_fixed(2, Rounding::HalfUp), "-0.13");
        assert_eq!(rational(-1, 8).to_fixed(2, Rounding::Up), "-0.13");
        assert_eq!(Rational::one().to_fixed(2, Rounding::Down), "1.00");
        assert_eq!(rational(1234, 1).to_fixed(0, Rounding::Down), "1234");
        assert_eq!(rational(-1, 1000).to_fixed(1, Rounding::Down), "0.0");
    }

    #[test]
    fn to_significant_rounds_as_requested() {
        assert_eq!(rational(1, 3).to_significant(3, Rounding::HalfUp).unwrap(), "0.333");
        assert_eq!(rational(2, 3).to_significant(3, Rounding::HalfUp).unwrap(), "0.667");
        assert_eq!(rational(2, 3).to_significant(3, Rounding::Down).unwrap(), "0.666");
        assert_eq!(rational(123456, 1).to_significant(2, Rounding::Down).unwrap(), "120000");
        assert_eq!(rational(123456, 1).to_significant(2, Rounding::Up).unwrap(), "130000");
        assert_eq!(rational(999, 100).to_significant(2, Rounding::Up).unwrap(), "10");
        assert_eq!(rational(1, 2).to_significant(5, Rounding::Down).unwrap(), "0.5");
        assert_eq!(rational(-1005, 1000).to_significant(3, Rounding::HalfUp).unwrap(), "-1.01");
        assert_eq!(rational(1, 1000).to_significant(1, Rounding::Down).unwrap(), "0.001");
        assert_eq!(Rational::zero().to_significant(4, Rounding::Down).unwrap(), "0");
        assert_eq!(
            Rational::one().to_significant(0, Rounding::Down),
            Err(ArithmeticError::ZeroSignificantDigits)
        );
    }
}
