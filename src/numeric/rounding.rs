// ============================================================================
// Rounding
// Explicit rounding policy for decimal results
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits a `Decimal` can carry.
pub const MAX_ROUND_DIGITS: u32 = 28;

/// How a midpoint (or any excess precision) is resolved when rounding.
///
/// The default is [`RoundingMode::HalfEven`], which is what
/// `Decimal::round_dp` does. Weighted means round with the default, so
/// `2.5` rounded to zero digits is `2` and `3.5` is `4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Banker's rounding: midpoints go to the even neighbour
    #[default]
    HalfEven,
    /// Midpoints go away from zero (`2.5 -> 3`, `-2.5 -> -3`)
    HalfAwayFromZero,
    /// Excess digits are dropped
    TowardZero,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::TowardZero => RoundingStrategy::ToZero,
        }
    }
}

/// Round `value` to `digits` fractional digits.
///
/// # Errors
/// Returns `InvalidInput` if `digits` exceeds [`MAX_ROUND_DIGITS`].
#[inline]
pub fn round_to(value: Decimal, digits: u32, mode: RoundingMode) -> NumericResult<Decimal> {
    if digits > MAX_ROUND_DIGITS {
        return Err(NumericError::InvalidInput);
    }
    let rounded = value.round_dp_with_strategy(digits, mode.strategy());
    tracing::trace!(%value, digits, ?mode, %rounded, "rounded decimal");
    Ok(rounded)
}

/// Apply an optional digit count with the default mode.
#[inline]
pub(crate) fn round_optional(value: Decimal, digits: Option<u32>) -> NumericResult<Decimal> {
    match digits {
        Some(digits) => round_to(value, digits, RoundingMode::default()),
        None => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_half_even() {
        assert_eq!(RoundingMode::default(), RoundingMode::HalfEven);
        assert_eq!(
            round_to(dec!(2.5), 0, RoundingMode::default()).unwrap(),
            dec!(2.5).round_dp(0)
        );
    }

    #[test]
    fn test_half_even() {
        assert_eq!(round_to(dec!(2.5), 0, RoundingMode::HalfEven).unwrap(), dec!(2));
        assert_eq!(round_to(dec!(3.5), 0, RoundingMode::HalfEven).unwrap(), dec!(4));
        assert_eq!(round_to(dec!(-2.5), 0, RoundingMode::HalfEven).unwrap(), dec!(-2));
        assert_eq!(round_to(dec!(1.235), 2, RoundingMode::HalfEven).unwrap(), dec!(1.24));
        assert_eq!(round_to(dec!(1.245), 2, RoundingMode::HalfEven).unwrap(), dec!(1.24));
    }

    #[test]
    fn test_half_away_from_zero() {
        assert_eq!(
            round_to(dec!(2.5), 0, RoundingMode::HalfAwayFromZero).unwrap(),
            dec!(3)
        );
        assert_eq!(
            round_to(dec!(-2.5), 0, RoundingMode::HalfAwayFromZero).unwrap(),
            dec!(-3)
        );
    }

    #[test]
    fn test_toward_zero() {
        assert_eq!(round_to(dec!(2.99), 1, RoundingMode::TowardZero).unwrap(), dec!(2.9));
        assert_eq!(
            round_to(dec!(-2.99), 1, RoundingMode::TowardZero).unwrap(),
            dec!(-2.9)
        );
    }

    #[test]
    fn test_digits_out_of_range() {
        let result = round_to(dec!(1), MAX_ROUND_DIGITS + 1, RoundingMode::HalfEven);
        assert_eq!(result, Err(NumericError::InvalidInput));
        assert!(round_to(dec!(1), MAX_ROUND_DIGITS, RoundingMode::HalfEven).is_ok());
    }

    #[test]
    fn test_round_optional() {
        assert_eq!(round_optional(dec!(1.23456), None).unwrap(), dec!(1.23456));
        assert_eq!(round_optional(dec!(1.23456), Some(2)).unwrap(), dec!(1.23));
    }
}
