// ============================================================================
// Numeric Helpers Library
// Stateless decimal averages, change ratios and sigmoids
// ============================================================================

//! # Numeric Helpers
//!
//! A small set of pure numeric functions for financial-style calculations.
//!
//! ## Features
//!
//! - **Decimal means** (plain and weighted) on `rust_decimal::Decimal`, with
//!   optional half-to-even rounding
//! - **Relative change** with a fixed epsilon in place of a zero denominator
//! - **Clipped linear slope value** that never divides by zero and never
//!   goes negative
//! - **Sigmoids**: a numerically stable logistic function and a fast
//!   `x / (1 + |x|)` curve
//!
//! ## Example
//!
//! ```rust
//! use numeric_helpers::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let prices = [Decimal::from(10), Decimal::from(20)];
//! assert_eq!(mean(prices)?, Decimal::from(15));
//!
//! let fills = [
//!     (Decimal::from(100), Decimal::from(100)),
//!     (Decimal::from(10), Decimal::from(10)),
//! ];
//! assert_eq!(weighted_mean_of(fills, Some(0))?, Decimal::from(92));
//!
//! assert_eq!(sigmoid(0.0), 0.5);
//! assert_eq!(sigmoid_fast(0.0), 0.0);
//! # Ok::<(), NumericError>(())
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        linear_slope_value, mean, relative_change, round_to, sigmoid, sigmoid_fast,
        weighted_mean, weighted_mean_of, NumericError, NumericResult, RoundingMode,
        WeightedValue,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_end_to_end_position_summary() {
        // Average entry of two fills, then the change to the current mark
        let entry = weighted_mean(dec!(101.50), dec!(3), dec!(99.25), dec!(1), Some(4)).unwrap();
        assert_eq!(entry, dec!(100.9375));

        let change = relative_change(entry, dec!(110)).unwrap();
        assert!(change > Decimal::ZERO);
        assert_eq!(
            round_to(change, 4, RoundingMode::HalfAwayFromZero).unwrap(),
            dec!(0.0824)
        );

        // Confidence decays linearly with the change and is squashed
        let decay = linear_slope_value(dec!(0.50), dec!(0.25), change).unwrap();
        assert!(decay >= Decimal::ZERO);
        let score = sigmoid(decay.to_f64().unwrap_or_default());
        assert!(score >= 0.5 && score < 1.0);
    }

    #[test]
    fn test_errors_surface_through_prelude() {
        let err = weighted_mean_of([WeightedValue::default()], None).unwrap_err();
        assert_eq!(err, NumericError::DivisionByZero);
        assert_eq!(err.to_string(), "division by zero");
    }
}
