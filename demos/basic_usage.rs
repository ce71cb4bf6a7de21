// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_helpers::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Numeric Helpers Example ===\n");

    let closes: Vec<Decimal> = [101.25, 99.80, 100.40, 102.10]
        .iter()
        .filter_map(|&p| Decimal::try_from(p).ok())
        .collect();
    println!("Mean close: {}", mean(closes.iter().copied())?);

    // Two fills of the same instrument
    let fills = [
        WeightedValue::new(Decimal::new(10150, 2), Decimal::from(3)),
        WeightedValue::new(Decimal::new(9925, 2), Decimal::from(1)),
    ];
    let entry = weighted_mean_of(fills, Some(4))?;
    println!("Average entry: {}", entry);

    let mark = Decimal::from(110);
    let change = relative_change(entry, mark)?;
    println!(
        "Relative change to {}: {}",
        mark,
        round_to(change, 6, RoundingMode::HalfEven)?
    );

    // Zero final value: epsilon substitution instead of an error
    println!(
        "Relative change to zero: {}",
        relative_change(Decimal::from(5), Decimal::ZERO)?
    );

    println!("\nSlope values for first=0.50 second=0.25:");
    for tenths in 0..=6 {
        let point = Decimal::new(tenths, 1);
        let value = linear_slope_value(Decimal::new(50, 2), Decimal::new(25, 2), point)?;
        println!("  point {} -> {}", point, value);
    }

    println!("\nSigmoid vs fast curve:");
    for x in [-4.0f64, -1.0, 0.0, 1.0, 4.0] {
        println!(
            "  x={:>5}  sigmoid={:.6}  sigmoid_fast={:.6}",
            x,
            sigmoid(x),
            sigmoid_fast(x as f32)
        );
    }

    match weighted_mean(Decimal::ONE, Decimal::ZERO, Decimal::TWO, Decimal::ZERO, None) {
        Ok(value) => println!("\nUnexpected weighted mean: {}", value),
        Err(err) => println!("\nZero weights: {}", err),
    }

    Ok(())
}
