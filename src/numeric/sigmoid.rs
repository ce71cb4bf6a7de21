// ============================================================================
// Sigmoids
// Logistic function and a cheap S-shaped approximation
// ============================================================================
//
// These work on binary floating point rather than Decimal: they feed
// scoring and smoothing paths where throughput matters more than exact
// decimal digits.

/// Logistic function `1 / (1 + e^-x)`.
///
/// Evaluated so that the exponential never overflows:
/// - `x >= 0`: `1 / (1 + e^-x)`
/// - `x < 0`: `e^x / (1 + e^x)`
///
/// Output lies in `(0, 1)`, saturating to the bounds only once the distance
/// falls below `f64` resolution. `sigmoid(0) == 0.5` and
/// `sigmoid(-x) == 1 - sigmoid(x)`. NaN propagates.
///
/// # Example
/// ```
/// use numeric_helpers::numeric::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(10.0) > 0.99);
/// assert!(sigmoid(-10.0) < 0.01);
/// ```
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let exp_x = x.exp();
        exp_x / (1.0 + exp_x)
    }
}

/// Fast S-curve `x / (1 + |x|)`.
///
/// This is **not** a logistic function despite the name. The range is
/// `(-1, 1)`, not `(0, 1)`, `sigmoid_fast(0) == 0`, and the curve saturates
/// far more slowly than [`sigmoid`]. Only rely on it being odd, monotonic
/// and bounded.
#[inline]
pub fn sigmoid_fast(x: f32) -> f32 {
    x / (1.0 + x.abs())
}
