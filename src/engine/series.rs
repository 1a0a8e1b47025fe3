// ============================================================================
// Ramanujan Series
// Exact term construction for 1/pi = (2√2/9801) Σ (4k)!(1103+26390k) / ((k!)^4 396^(4k))
// ============================================================================

use crate::numeric::{divide, round, square_root, BigDecimal, Context, NumericError, NumericResult};
use num_bigint::{BigInt, BigUint};
use num_traits::One;

/// Constant term of the linear factor (1103 + 26390k)
pub const LINEAR_OFFSET: u32 = 1103;

/// Slope of the linear factor (1103 + 26390k)
pub const LINEAR_SLOPE: u32 = 26390;

/// Base of the power 396^(4k)
pub const POWER_BASE: u32 = 396;

/// Denominator of the outer constant 2√2 / 9801
pub const CONSTANT_DENOMINATOR: u32 = 9801;

/// n! as an exact integer.
pub fn factorial(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, i| acc * i)
}

/// The outer multiplier `2·√2 / 9801` at the context's precision.
pub fn constant_multiplier(context: &Context) -> NumericResult<BigDecimal> {
    let two = BigDecimal::from(2u32);
    let root_two = square_root(context, &two)?;
    divide(
        context,
        &round(context, &(&two * &root_two)),
        &BigDecimal::from(CONSTANT_DENOMINATOR),
    )
}

/// The k-th addend of the series as an exact fraction.
///
/// Both parts are exact integers; only [`evaluate`](Self::evaluate) rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RamanujanTerm {
    index: u32,
    numerator: BigInt,
    denominator: BigInt,
}

impl RamanujanTerm {
    /// Build term `index`.
    ///
    /// # Errors
    /// Returns `Overflow` if `4 · index` does not fit in `u32`.
    pub fn new(index: u32) -> NumericResult<Self> {
        let four_k = index.checked_mul(4).ok_or(NumericError::Overflow)?;

        // (4k)! · (1103 + 26390k)
        let linear = BigUint::from(LINEAR_OFFSET) + BigUint::from(LINEAR_SLOPE) * index;
        let numerator = factorial(u64::from(four_k)) * linear;

        // (k!)^4 · 396^(4k)
        let denominator = factorial(u64::from(index)).pow(4) * BigUint::from(POWER_BASE).pow(four_k);

        Ok(Self {
            index,
            numerator: numerator.into(),
            denominator: denominator.into(),
        })
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// numerator ÷ denominator, rounded in `context`.
    pub fn evaluate(&self, context: &Context) -> NumericResult<BigDecimal> {
        divide(
            context,
            &BigDecimal::new(self.numerator.clone(), 0),
            &BigDecimal::new(self.denominator.clone(), 0),
        )
    }
}
