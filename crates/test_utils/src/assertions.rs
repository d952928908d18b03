//! Custom Test Assertions
//!
//! Assertion helpers that print domain values in failure messages.

use core_kernel::Money;
use domain_rider::PolicyRider;
use rust_decimal::Decimal;

/// Asserts a Money value has exactly `expected` as its amount
///
/// # Panics
///
/// Panics if the amounts differ
pub fn assert_amount(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Expected {} {}, got {}",
        actual.currency().symbol(),
        expected,
        actual
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money);
}

/// Asserts the rider codes of a list, in order
pub fn assert_rider_codes(riders: &[PolicyRider], expected: &[&str]) {
    let actual: Vec<&str> = riders.iter().map(|r| r.code().as_str()).collect();
    assert_eq!(actual, expected, "Rider codes differ");
}
