// ============================================================================
// Change and Slope
// Relative change between two values and the clipped linear slope value
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;

/// Stand-in denominator used by [`relative_change`] when `final_value` is
/// exactly zero (0.00001).
pub const RELATIVE_CHANGE_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 5);

/// Relative change from `initial` to `final_value`: `(final - initial) / final`.
///
/// A zero `final_value` is replaced with [`RELATIVE_CHANGE_EPSILON`] instead
/// of failing. Near zero the result is therefore an approximation with a very
/// large magnitude, e.g. `relative_change(5, 0) == -499999`.
///
/// # Errors
/// Returns `Overflow` if the difference or quotient leaves the decimal range.
pub fn relative_change(initial: Decimal, final_value: Decimal) -> NumericResult<Decimal> {
    let denominator = if final_value.is_zero() {
        tracing::debug!(
            %initial,
            epsilon = %RELATIVE_CHANGE_EPSILON,
            "final value is zero, substituting epsilon"
        );
        RELATIVE_CHANGE_EPSILON
    } else {
        final_value
    };

    denominator
        .checked_sub(initial)
        .and_then(|delta| delta.checked_div(denominator))
        .ok_or(NumericError::Overflow)
}

/// Value at `point` on the line falling from `second` with slope
/// `second / first`, floored at zero.
///
/// The intercept equals `second`, so the result is
/// `max(0, second - (second / first) * point)`. When either `first` or
/// `second` is zero the result is zero and no division takes place, so this
/// never fails with a division by zero and never returns a negative value.
///
/// # Errors
/// Returns `Overflow` if the slope or its product with `point` leaves the
/// decimal range.
///
/// # Example
/// ```
/// use numeric_helpers::numeric::linear_slope_value;
/// use rust_decimal::Decimal;
///
/// let first = Decimal::new(50, 2); // 0.50
/// let second = Decimal::new(25, 2); // 0.25
/// let value = linear_slope_value(first, second, Decimal::new(40, 2))?;
/// assert_eq!(value, Decimal::new(5, 2));
/// # Ok::<(), numeric_helpers::numeric::NumericError>(())
/// ```
pub fn linear_slope_value(
    first: Decimal,
    second: Decimal,
    point: Decimal,
) -> NumericResult<Decimal> {
    if first.is_zero() || second.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let slope = second.checked_div(first).ok_or(NumericError::Overflow)?;
    let intercept = second;

    let value = slope
        .checked_mul(point)
        .and_then(|fall| intercept.checked_sub(fall))
        .ok_or(NumericError::Overflow)?;

    if value < Decimal::ZERO {
        tracing::debug!(%first, %second, %point, %value, "slope value clipped to zero");
        return Ok(Decimal::ZERO);
    }

    Ok(value)
}
