// ============================================================================
// Basic Usage Example
// ============================================================================

use bigdecimal_validator::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== BigDecimal Validator Example ===\n");

    // A salary field: 1-10 digits before the point, at most 2 after,
    // between 0 and 5684.23 inclusive
    let rules = ValidationRules::new()
        .with_min_integer_digits(1)
        .with_max_integer_digits(10)
        .with_max_fractional_digits(2)
        .with_min_value(0)
        .with_max_value("5684.23".parse::<BigDecimal>().unwrap());

    let validator = DecimalValidator::new();

    let candidates = ["124.2", "0.00", "5684.23", "5684.24", "124.225", "1E8", "-3"];

    for text in candidates {
        let value: BigDecimal = text.parse().unwrap();
        let result = validator.validate(Some(&value), &rules);
        match result.fail_message() {
            None => println!("  {:>10}  ok", text),
            Some(message) => println!("  {:>10}  {}", text, message),
        }
    }

    // Absent values always fail; skipping them is the caller's decision
    let result = validator.validate(None, &rules);
    println!("\nAbsent value: {}", result.fail_message().unwrap());

    // A validator without fraction checks truncates before checking
    println!("\n=== Truncating Validator ===");
    let whole_units = ValidationRules::new()
        .with_max_fractional_digits(0)
        .with_max_value(100);
    let truncating = DecimalValidator::without_fraction_checks();
    let value: BigDecimal = "100.03".parse().unwrap();
    let result = truncating.validate(Some(&value), &whole_units);
    println!(
        "  100.03 against max 100, fractions ignored: {}",
        if result.is_valid() { "ok" } else { "rejected" }
    );
}
