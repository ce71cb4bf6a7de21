// ============================================================================
// Means
// Arithmetic and weighted means over high-precision decimals
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::round_optional;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value paired with the weight it carries in a weighted mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightedValue {
    pub value: Decimal,
    pub weight: Decimal,
}

impl WeightedValue {
    #[inline]
    pub const fn new(value: Decimal, weight: Decimal) -> Self {
        Self { value, weight }
    }

    /// `value * weight`.
    ///
    /// # Errors
    /// Returns `Overflow` if the product does not fit in a `Decimal`.
    #[inline]
    pub fn contribution(&self) -> NumericResult<Decimal> {
        self.value
            .checked_mul(self.weight)
            .ok_or(NumericError::Overflow)
    }
}

impl From<(Decimal, Decimal)> for WeightedValue {
    #[inline]
    fn from((value, weight): (Decimal, Decimal)) -> Self {
        Self::new(value, weight)
    }
}

/// Arithmetic mean of `values`, or zero when there are none.
///
/// # Errors
/// Returns `Overflow` if the running sum leaves the decimal range.
pub fn mean<I>(values: I) -> NumericResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let mut sum = Decimal::ZERO;
    let mut count: u64 = 0;

    for value in values {
        sum = sum.checked_add(value).ok_or(NumericError::Overflow)?;
        count += 1;
    }

    if count == 0 {
        return Ok(Decimal::ZERO);
    }

    sum.checked_div(Decimal::from(count))
        .ok_or(NumericError::Overflow)
}

/// Weighted mean of two values:
/// `(value_a * weight_a + value_b * weight_b) / (weight_a + weight_b)`.
///
/// With `round_digits` set, the quotient is rounded half-to-even to that many
/// fractional digits (see [`RoundingMode`](super::RoundingMode)).
///
/// # Errors
/// - `DivisionByZero` if the weights sum to zero
/// - `InvalidInput` if `round_digits` exceeds the decimal scale limit
/// - `Overflow` if an intermediate result leaves the decimal range
///
/// # Example
/// ```
/// use numeric_helpers::numeric::weighted_mean;
/// use rust_decimal::Decimal;
///
/// let hundred = Decimal::from(100);
/// let ten = Decimal::from(10);
/// // (100*100 + 10*10) / 110 = 91.81..
/// let avg = weighted_mean(hundred, hundred, ten, ten, Some(0))?;
/// assert_eq!(avg, Decimal::from(92));
/// # Ok::<(), numeric_helpers::numeric::NumericError>(())
/// ```
pub fn weighted_mean(
    value_a: Decimal,
    weight_a: Decimal,
    value_b: Decimal,
    weight_b: Decimal,
    round_digits: Option<u32>,
) -> NumericResult<Decimal> {
    weighted_mean_of(
        [
            WeightedValue::new(value_a, weight_a),
            WeightedValue::new(value_b, weight_b),
        ],
        round_digits,
    )
}

/// Weighted mean over a sequence of value/weight pairs.
///
/// An empty sequence yields exactly zero. Anything convertible into a
/// [`WeightedValue`] is accepted, including `(value, weight)` tuples.
///
/// # Errors
/// Same as [`weighted_mean`]; `DivisionByZero` is only possible for a
/// non-empty sequence whose weights cancel out.
pub fn weighted_mean_of<I, T>(pairs: I, round_digits: Option<u32>) -> NumericResult<Decimal>
where
    I: IntoIterator<Item = T>,
    T: Into<WeightedValue>,
{
    let mut weighted_sum = Decimal::ZERO;
    let mut total_weight = Decimal::ZERO;
    let mut is_empty = true;

    for pair in pairs {
        let pair = pair.into();
        is_empty = false;
        weighted_sum = weighted_sum
            .checked_add(pair.contribution()?)
            .ok_or(NumericError::Overflow)?;
        total_weight = total_weight
            .checked_add(pair.weight)
            .ok_or(NumericError::Overflow)?;
    }

    if is_empty {
        return Ok(Decimal::ZERO);
    }

    if total_weight.is_zero() {
        tracing::debug!(%weighted_sum, "weighted mean over zero total weight");
        return Err(NumericError::DivisionByZero);
    }

    let result = weighted_sum
        .checked_div(total_weight)
        .ok_or(NumericError::Overflow)?;

    round_optional(result, round_digits)
}
