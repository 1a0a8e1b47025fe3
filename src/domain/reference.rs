// ============================================================================
// Reference Digits
// Known decimal expansion of pi for accuracy checks
// ============================================================================

use crate::numeric::ScaledDecimal;
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pi to 1000 fractional digits (truncated, not rounded).
pub const KNOWN_PI: &str =
    "3.\
     14159265358979323846264338327950288419716939937510582097494459230781640628620899\
     86280348253421170679821480865132823066470938446095505822317253594081284811174502\
     84102701938521105559644622948954930381964428810975665933446128475648233786783165\
     27120190914564856692346034861045432664821339360726024914127372458700660631558817\
     48815209209628292540917153643678925903600113305305488204665213841469519415116094\
     33057270365759591953092186117381932611793105118548074462379962749567351885752724\
     89122793818301194912983367336244065664308602139494639522473719070217986094370277\
     05392171762931767523846748184676694051320005681271452635608277857713427577896091\
     73637178721468440901224953430146549585371050792279689258923542019956112129021960\
     86403441815981362977477130996051870721134999999837297804995105973173281609631859\
     50244594553469083026425223082533446850352619311881710100031378387528865875332083\
     81420617177669147303598253490428755468731159562863882353787593751957781857780532\
     1712268066130019278766111959092164201989";

/// Number of fractional digits available in [`KNOWN_PI`]
pub const KNOWN_PI_FRACTIONAL_DIGITS: usize = 1000;

/// Reference pi truncated to `precision` fractional digits.
///
/// Takes the first `precision + 2` characters of [`KNOWN_PI`] (the `"3."`
/// prefix plus digits), or the whole string when it is shorter.
pub fn known_pi(precision: u32) -> ScaledDecimal {
    let end = (precision as usize).saturating_add(2).min(KNOWN_PI.len());
    let digits = &KNOWN_PI[..end];

    ScaledDecimal::new(
        digits.replace('.', "").parse::<BigInt>().unwrap_or_default(),
        digits.len().saturating_sub(2) as i64,
    )
}

/// Count leading fractional digits of `value` that agree with pi.
///
/// Values whose integer part is not `3` match nothing.
pub fn matching_digits(value: &ScaledDecimal) -> u32 {
    let rendered = value.to_string();
    let Some((int_part, fraction)) = rendered.split_once('.') else {
        return 0;
    };
    if int_part != "3" {
        return 0;
    }

    fraction
        .bytes()
        .zip(KNOWN_PI[2..].bytes())
        .take_while(|(computed, known)| computed == known)
        .count() as u32
}

/// Computed value side by side with the reference digits
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceComparison {
    /// Value under test
    pub computed: ScaledDecimal,
    /// Reference pi truncated to the same precision
    pub reference: ScaledDecimal,
    /// |computed - reference|, exact
    pub absolute_error: ScaledDecimal,
    /// Leading fractional digits shared with pi
    pub matching_digits: u32,
    /// Requested precision exceeded the reference digits
    pub reference_exhausted: bool,
}

impl ReferenceComparison {
    pub fn new(computed: &ScaledDecimal, precision: u32) -> Self {
        let reference = known_pi(precision);
        let absolute_error = (computed - &reference).abs();

        Self {
            computed: computed.clone(),
            reference,
            absolute_error,
            matching_digits: matching_digits(computed),
            reference_exhausted: precision as usize > KNOWN_PI_FRACTIONAL_DIGITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> ScaledDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_reference_length() {
        assert_eq!(KNOWN_PI.len(), KNOWN_PI_FRACTIONAL_DIGITS + 2);
        assert!(KNOWN_PI.starts_with("3.14159265358979323846"));
        assert!(KNOWN_PI.ends_with("164201989"));
    }

    #[test]
    fn test_known_pi_truncates() {
        assert_eq!(known_pi(4).to_string(), "3.1415");
        assert_eq!(known_pi(1).to_string(), "3.1");
        assert_eq!(known_pi(0).to_string(), "3");
    }

    #[test]
    fn test_known_pi_beyond_reference() {
        let value = known_pi(5000);
        assert_eq!(value.scale(), KNOWN_PI_FRACTIONAL_DIGITS as i64);
    }

    #[test]
    fn test_matching_digits() {
        assert_eq!(matching_digits(&dec("3.1415927300")), 6);
        assert_eq!(matching_digits(&dec("3.14159")), 5);
        assert_eq!(matching_digits(&dec("2.14159")), 0);
        assert_eq!(matching_digits(&dec("3")), 0);
    }

    #[test]
    fn test_comparison() {
        let comparison = ReferenceComparison::new(&dec("3.1416"), 4);
        assert_eq!(comparison.reference.to_string(), "3.1415");
        assert_eq!(comparison.absolute_error.to_string(), "0.0001");
        assert_eq!(comparison.matching_digits, 3);
        assert!(!comparison.reference_exhausted);
    }
}
