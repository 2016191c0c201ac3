use {
    crate::Rational,
    anyhow::{Context, Result},
    num::{BigInt, BigRational, Zero},
    std::{ops::Neg, str::FromStr},
};

/// Converts a decimal string (e.g., `"0.1"`) to an exact `BigRational`.
///
/// Floats can not represent most decimal fractions, so user supplied
/// quantities like slippage tolerances are parsed from their textual form.
pub fn big_rational_from_decimal_str(s: &str) -> Result<BigRational> {
    let s = s.trim();
    // Handle negative numbers
    let (is_negative, s) = if let Some(stripped) = s.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, s)
    };

    let parts: Vec<&str> = s.split('.').collect();
    match parts.len() {
        1 => {
            // No fractional part
            let numerator = BigInt::from_str(parts[0]).context("unable to parse integer part")?;
            Ok(BigRational::from_integer(numerator))
        }
        2 => {
            let integer_part = if parts[0].is_empty() {
                // Handle cases like ".5" as "0.5"
                BigInt::zero()
            } else {
                BigInt::from_str(parts[0]).context("unable to parse integer part")?
            };

            let fractional_part = if parts[1].is_empty() {
                // Handle cases like "1." as "1.0"
                BigInt::zero()
            } else {
                BigInt::from_str(parts[1]).context("unable to parse fractional part")?
            };

            let fractional_length =
                u32::try_from(parts[1].len()).context("fractional part too long")?;

            let denominator = BigInt::from(10u32).pow(fractional_length);
            let numerator = integer_part * &denominator + fractional_part;
            Ok(BigRational::new(numerator, denominator))
        }
        _ => Err(anyhow::anyhow!("invalid decimal number")),
    }
    .map(|ratio| if is_negative { ratio.neg() } else { ratio })
}

/// Like [`big_rational_from_decimal_str`] but yields a [`Rational`].
pub fn rational_from_decimal_str(s: &str) -> Result<Rational> {
    big_rational_from_decimal_str(s).map(Rational::from)
}

#[cfg(test)]
mod tests {
    use {super::*, num::One};

    #[test]
    fn big_rational_from_decimal_str_() {
        assert_eq!(
            big_rational_from_decimal_str("0").unwrap(),
            BigRational::zero()
        );
        assert_eq!(
            big_rational_from_decimal_str("1").unwrap(),
            BigRational::one()
        );
        assert_eq!(
            big_rational_from_decimal_str("-1").unwrap(),
            -BigRational::one()
        );
        assert_eq!(
            big_rational_from_decimal_str("1.").unwrap(),
            BigRational::one()
        );
        assert_eq!(
            big_rational_from_decimal_str("1.000").unwrap(),
            BigRational::one()
        );
        assert_eq!(
            big_rational_from_decimal_str(".1").unwrap(),
            BigRational::new(1.into(), 10.into())
        );
        assert_eq!(
            big_rational_from_decimal_str("-0.125").unwrap(),
            -BigRational::new(1.into(), 8.into())
        );

        assert!(big_rational_from_decimal_str("0.1.0").is_err());
        assert!(big_rational_from_decimal_str("a").is_err());
        assert!(big_rational_from_decimal_str("1 0").is_err());
    }

    #[test]
    fn rational_from_decimal_str_() {
        assert_eq!(
            rational_from_decimal_str("0.5").unwrap(),
            Rational::new(1, 2).unwrap()
        );
    }
}
