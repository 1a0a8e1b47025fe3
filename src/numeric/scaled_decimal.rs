// ============================================================================
// Scaled Decimal
// Fixed-scale result values rendered in plain notation
// ============================================================================

use super::context::RoundingMode;
use super::errors::{NumericError, NumericResult};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// A [`BigDecimal`] that always displays in plain notation.
///
/// `BigDecimal`'s own `Display` switches to exponent form for small
/// magnitudes; results, reference digits and errors are printed and
/// serialized with every fractional digit instead.
///
/// # Example
/// ```
/// use ramanujan_pi::numeric::{RoundingMode, ScaledDecimal};
///
/// let x: ScaledDecimal = "2.675".parse().unwrap();
/// assert_eq!(x.quantize(2, RoundingMode::HalfEven).to_string(), "2.68");
/// assert_eq!(x.quantize(2, RoundingMode::Down).to_string(), "2.67");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaledDecimal(BigDecimal);

/// Power of ten of the most significant digit: `3.14` → 0, `0.00123` → -3.
pub fn adjusted_exponent(value: &BigDecimal) -> i64 {
    let (_, scale) = value.as_bigint_and_exponent();
    value.digits() as i64 - 1 - scale
}

impl ScaledDecimal {
    /// `digits × 10^(-scale)`
    pub fn new(digits: impl Into<BigInt>, scale: i64) -> Self {
        Self(BigDecimal::new(digits.into(), scale))
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::new(value, 0)
    }

    #[inline]
    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    pub fn into_inner(self) -> BigDecimal {
        self.0
    }

    /// Digits after the decimal point.
    pub fn scale(&self) -> i64 {
        self.0.as_bigint_and_exponent().1
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn significant_digits(&self) -> u64 {
        self.0.digits()
    }

    pub fn adjusted_exponent(&self) -> i64 {
        adjusted_exponent(&self.0)
    }

    /// Rescale to exactly `fractional_digits` digits after the point.
    pub fn quantize(&self, fractional_digits: u32, mode: RoundingMode) -> Self {
        Self(self.0.with_scale_round(i64::from(fractional_digits), mode.into()))
    }

    /// Cut to `fractional_digits` digits, toward zero.
    pub fn truncate(&self, fractional_digits: u32) -> Self {
        self.quantize(fractional_digits, RoundingMode::Down)
    }
}

impl From<BigDecimal> for ScaledDecimal {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl Sub for &ScaledDecimal {
    type Output = ScaledDecimal;

    fn sub(self, rhs: Self) -> Self::Output {
        ScaledDecimal(&self.0 - &rhs.0)
    }
}

impl fmt::Display for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_plain_string())
    }
}

impl FromStr for ScaledDecimal {
    type Err = NumericError;

    fn from_str(s: &str) -> NumericResult<Self> {
        BigDecimal::from_str(s.trim())
            .map(Self)
            .map_err(|_| NumericError::InvalidInput)
    }
}

// ============================================================================
// Serialization (decimal string)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ScaledDecimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScaledDecimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn dec(s: &str) -> ScaledDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_plain_display() {
        assert_eq!(ScaledDecimal::new(123456, 3).to_string(), "123.456");
        assert_eq!(ScaledDecimal::new(1, 30).to_string(), "0.000000000000000000000000000001");
        assert_eq!(ScaledDecimal::new(-5, 1).to_string(), "-0.5");
        assert_eq!(ScaledDecimal::new(31415926536i64, 10).to_string(), "3.1415926536");
    }

    #[test]
    fn test_parse() {
        let x = dec(" 3.14159 ");
        assert_eq!(x.scale(), 5);
        assert_eq!(x.significant_digits(), 6);
        assert_eq!("abc".parse::<ScaledDecimal>(), Err(NumericError::InvalidInput));
        assert_eq!("".parse::<ScaledDecimal>(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_quantize_rounding_modes() {
        let tie = dec("2.5");
        assert_eq!(tie.quantize(0, RoundingMode::HalfEven).to_string(), "2");
        assert_eq!(tie.quantize(0, RoundingMode::HalfUp).to_string(), "3");
        assert_eq!(dec("3.5").quantize(0, RoundingMode::HalfEven).to_string(), "4");
        assert_eq!(dec("-2.7").quantize(0, RoundingMode::Down).to_string(), "-2");
    }

    #[test]
    fn test_quantize_fixes_scale() {
        let x = dec("1.5").quantize(3, RoundingMode::HalfEven);
        assert_eq!(x.to_string(), "1.500");
        assert_eq!(x.scale(), 3);
        assert_eq!(x, dec("1.5"));
        assert_eq!(dec("3.14159").truncate(3).to_string(), "3.141");
    }

    #[test]
    fn test_exponent_and_difference() {
        assert_eq!(dec("3.14").adjusted_exponent(), 0);
        assert_eq!(dec("0.00123").adjusted_exponent(), -3);
        assert_eq!(dec("1200").adjusted_exponent(), 3);

        let diff = &dec("3.1415") - &dec("3.1416");
        assert_eq!(diff.abs().to_string(), "0.0001");
        assert!(dec("3.14") < dec("3.141"));
    }

    quickcheck! {
        fn prop_quantize_is_idempotent(coefficient: i64, scale: u8, digits: u8) -> bool {
            let x = ScaledDecimal::new(coefficient, i64::from(scale % 30));
            let once = x.quantize(u32::from(digits % 30), RoundingMode::HalfEven);
            once.quantize(u32::from(digits % 30), RoundingMode::HalfEven) == once
        }

        fn prop_truncate_never_grows_magnitude(coefficient: i64, scale: u8, digits: u8) -> bool {
            let x = ScaledDecimal::new(coefficient, i64::from(scale % 30));
            x.truncate(u32::from(digits % 30)).abs() <= x.abs()
        }
    }
}
