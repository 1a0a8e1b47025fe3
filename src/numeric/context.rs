// ============================================================================
// Decimal Context
// Working precision and rounding for bigdecimal operations
// ============================================================================

use super::errors::{NumericError, NumericResult};
use bigdecimal::{BigDecimal, Context};
use num_traits::Zero;
use std::fmt;
use std::num::NonZeroU64;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extra digits carried by a reciprocal before it is multiplied back in.
const RECIPROCAL_GUARD_DIGITS: u64 = 3;

/// Rounding rule applied whenever digits are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RoundingMode {
    /// Discard digits (toward zero)
    Down,
    /// Ties away from zero
    HalfUp,
    /// Ties to the neighbour with an even last digit (banker's rounding)
    #[default]
    HalfEven,
}

impl RoundingMode {
    pub fn name(&self) -> &'static str {
        match self {
            RoundingMode::Down => "down",
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfEven => "half-even",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<RoundingMode> for bigdecimal::RoundingMode {
    fn from(mode: RoundingMode) -> Self {
        match mode {
            RoundingMode::Down => bigdecimal::RoundingMode::Down,
            RoundingMode::HalfUp => bigdecimal::RoundingMode::HalfUp,
            RoundingMode::HalfEven => bigdecimal::RoundingMode::HalfEven,
        }
    }
}

// ============================================================================
// Context Operations
// ============================================================================
//
// A `bigdecimal::Context` is a plain value: each calculation builds its own
// and passes it by reference, so no precision setting is shared between
// threads.

/// Context with `precision` significant digits.
///
/// # Errors
/// `InvalidPrecision` for zero digits.
///
/// # Example
/// ```
/// use ramanujan_pi::numeric::{divide, working_context, BigDecimal, RoundingMode};
///
/// let ctx = working_context(5, RoundingMode::HalfEven).unwrap();
/// let third = divide(&ctx, &BigDecimal::from(1), &BigDecimal::from(3)).unwrap();
/// assert_eq!(third, "0.33333".parse::<BigDecimal>().unwrap());
/// ```
pub fn working_context(precision: u32, rounding: RoundingMode) -> NumericResult<Context> {
    let precision = NonZeroU64::new(u64::from(precision)).ok_or(NumericError::InvalidPrecision)?;
    Ok(Context::new(precision, rounding.into()))
}

/// Round `value` to the context precision with the context rounding mode.
pub fn round(context: &Context, value: &BigDecimal) -> BigDecimal {
    value.with_precision_round(context.precision(), context.rounding_mode())
}

/// `1 / value` at the context precision.
///
/// # Errors
/// `DivisionByZero` for a zero `value`.
pub fn reciprocal(context: &Context, value: &BigDecimal) -> NumericResult<BigDecimal> {
    if value.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    Ok(value.inverse_with_context(context))
}

/// `dividend / divisor` at the context precision.
///
/// The reciprocal is taken with a few guard digits so the product is
/// rounded only once at the context precision.
///
/// # Errors
/// `DivisionByZero` for a zero `divisor`.
pub fn divide(context: &Context, dividend: &BigDecimal, divisor: &BigDecimal) -> NumericResult<BigDecimal> {
    let guarded = context
        .precision()
        .checked_add(RECIPROCAL_GUARD_DIGITS)
        .ok_or(NumericError::InvalidPrecision)?;
    let inverse = reciprocal(&Context::new(guarded, context.rounding_mode()), divisor)?;

    Ok(round(context, &(dividend * &inverse)))
}

/// Square root at the context precision.
///
/// # Errors
/// `NegativeSquareRoot` for negative input.
pub fn square_root(context: &Context, value: &BigDecimal) -> NumericResult<BigDecimal> {
    value
        .sqrt_with_context(context)
        .ok_or(NumericError::NegativeSquareRoot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    fn ctx(precision: u32, rounding: RoundingMode) -> Context {
        working_context(precision, rounding).unwrap()
    }

    #[test]
    fn test_zero_precision_rejected() {
        assert_eq!(
            working_context(0, RoundingMode::HalfEven).err(),
            Some(NumericError::InvalidPrecision)
        );
    }

    #[test]
    fn test_context_carries_settings() {
        let context = ctx(10, RoundingMode::Down);
        assert_eq!(context.precision().get(), 10);
        assert_eq!(context.rounding_mode(), bigdecimal::RoundingMode::Down);
    }

    #[test]
    fn test_round_tie_follows_mode() {
        let square = dec("2.25");
        assert_eq!(round(&ctx(2, RoundingMode::HalfEven), &square), dec("2.2"));
        assert_eq!(round(&ctx(2, RoundingMode::HalfUp), &square), dec("2.3"));
        assert_eq!(round(&ctx(2, RoundingMode::Down), &dec("2.29")), dec("2.2"));
        assert_eq!(round(&ctx(3, RoundingMode::HalfEven), &dec("1.234")), dec("1.23"));
    }

    #[test]
    fn test_divide_repeating() {
        let one = BigDecimal::from(1);
        let two = BigDecimal::from(2);
        let three = BigDecimal::from(3);

        let context = ctx(5, RoundingMode::HalfEven);
        assert_eq!(divide(&context, &one, &three).unwrap(), dec("0.33333"));
        assert_eq!(divide(&context, &two, &three).unwrap(), dec("0.66667"));

        let truncating = ctx(5, RoundingMode::Down);
        assert_eq!(divide(&truncating, &two, &three).unwrap(), dec("0.66666"));
    }

    #[test]
    fn test_divide_by_zero() {
        let context = ctx(10, RoundingMode::HalfEven);
        assert_eq!(
            divide(&context, &BigDecimal::from(1), &dec("0.000")),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            reciprocal(&context, &BigDecimal::zero()),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_reciprocal() {
        let context = ctx(6, RoundingMode::HalfEven);
        assert_eq!(reciprocal(&context, &BigDecimal::from(7)).unwrap(), dec("0.142857"));
        assert_eq!(reciprocal(&context, &dec("0.25")).unwrap(), dec("4"));
    }

    #[test]
    fn test_square_root() {
        let context = ctx(20, RoundingMode::HalfEven);
        let root2 = square_root(&context, &BigDecimal::from(2)).unwrap();
        assert_eq!(root2, dec("1.4142135623730950488"));
        assert_eq!(square_root(&context, &dec("0.0144")).unwrap(), dec("0.12"));

        assert_eq!(
            square_root(&context, &dec("-4")),
            Err(NumericError::NegativeSquareRoot)
        );
    }

    #[test]
    fn test_independent_contexts() {
        let one = BigDecimal::from(1);
        let seven = BigDecimal::from(7);

        let narrow = divide(&ctx(3, RoundingMode::HalfEven), &one, &seven).unwrap();
        let wide = divide(&ctx(12, RoundingMode::HalfEven), &one, &seven).unwrap();
        assert_eq!(narrow, dec("0.143"));
        assert_eq!(wide, dec("0.142857142857"));
    }

    #[test]
    fn test_rounding_mode_names() {
        assert_eq!(RoundingMode::HalfEven.to_string(), "half-even");
        assert_eq!(RoundingMode::Down.name(), "down");
        assert_eq!(
            bigdecimal::RoundingMode::from(RoundingMode::HalfUp),
            bigdecimal::RoundingMode::HalfUp
        );
    }
}
