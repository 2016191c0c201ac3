use {
    number::{ArithmeticError, Rational, Rounding, conversions::rational_from_decimal_str},
    std::{
        fmt::{self, Display, Formatter},
        str::FromStr,
    },
};

/// A proportion such as a slippage tolerance or a price impact. `1/100` is
/// one percent; the value is only multiplied by 100 for display.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Percent(Rational);

impl Percent {
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        Rational::new(numerator, denominator).map(Self)
    }

    pub fn zero() -> Self {
        Self(Rational::zero())
    }

    pub fn as_rational(&self) -> &Rational {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn to_significant(
        &self,
        significant_digits: u32,
        rounding: Rounding,
    ) -> Result<String, ArithmeticError> {
        self.scaled().to_significant(significant_digits, rounding)
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.scaled().to_fixed(decimal_places, rounding)
    }

    fn scaled(&self) -> Rational {
        &self.0 * &Rational::from_integer(100)
    }
}

impl From<Rational> for Percent {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

/// Parses a percentage, so `"0.5"` is half a percent.
impl FromStr for Percent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let percentage = rational_from_decimal_str(s)?;
        Ok(Self(percentage.checked_div(&Rational::from_integer(100))?))
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}%", self.to_fixed(2, Rounding::HalfUp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_percentages() {
        assert_eq!("5".parse::<Percent>().unwrap(), Percent::new(5, 100).unwrap());
        assert_eq!("0.5".parse::<Percent>().unwrap(), Percent::new(1, 200).unwrap());
        assert!("-1".parse::<Percent>().unwrap().is_negative());
        assert!("five".parse::<Percent>().is_err());
    }

    #[test]
    fn formats_times_hundred() {
        let percent = Percent::new(1, 3).unwrap();
        assert_eq!(percent.to_fixed(2, Rounding::HalfUp), "33.33");
        assert_eq!(percent.to_significant(3, Rounding::Up).unwrap(), "33.4");
        assert_eq!(percent.to_string(), "33.33%");
        assert_eq!(Percent::zero().to_string(), "0.00%");
    }
}
