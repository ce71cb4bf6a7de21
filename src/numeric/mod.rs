// ============================================================================
// Numeric Module
// Stateless helpers over high-precision decimals and floats
// ============================================================================
//
// This module provides:
// - mean / weighted_mean / weighted_mean_of: decimal averages
// - relative_change / linear_slope_value: change and clipped slope
// - sigmoid / sigmoid_fast: logistic function and its cheap approximation
// - round_to / RoundingMode: the rounding policy used by weighted means
// - NumericError: error type for the decimal operations
//
// Design principles:
// - Pure functions, no shared state
// - Decimal arithmetic returns Result (no panics on overflow)
// - Defined edge cases return a value; only real failures are errors
// - Rounding is half-to-even unless a mode is given explicitly

mod change;
mod errors;
mod mean;
mod rounding;
mod sigmoid;

pub use change::{linear_slope_value, relative_change, RELATIVE_CHANGE_EPSILON};
pub use errors::{NumericError, NumericResult};
pub use mean::{mean, weighted_mean, weighted_mean_of, WeightedValue};
pub use rounding::{round_to, RoundingMode, MAX_ROUND_DIGITS};
pub use sigmoid::{sigmoid, sigmoid_fast};
