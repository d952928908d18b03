//! Property-Based Test Generators
//!
//! Proptest strategies that produce riders and attachments respecting the
//! catalog invariants (ordered age bands, non-negative USD amounts).

use core_kernel::{Currency, Money};
use domain_rider::{PolicyRider, Rider, RiderCategory};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::{TestPolicyRiderBuilder, TestRiderBuilder};

/// Customer ages, including the extremes
pub fn age_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        8 => 0u32..=120u32,
        1 => Just(0u32),
        1 => Just(u32::MAX),
    ]
}

/// Ordered `(min_age, max_age)` pairs
pub fn age_band_strategy() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=100u32, 0u32..=100u32).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

/// USD premiums between 0.01 and 100,000.00
pub fn premium_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::USD))
}

/// Discount percentages 0.00 to 100.00
pub fn discount_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=10_000u32).prop_map(|n| Decimal::new(n as i64, 2))
}

pub fn category_strategy() -> impl Strategy<Value = RiderCategory> {
    prop::sample::select(RiderCategory::ALL.to_vec())
}

/// Riders with random premium, category, and age band
pub fn rider_strategy() -> impl Strategy<Value = Rider> {
    (
        "[A-Z]{2}[0-9]{1,3}",
        premium_strategy(),
        category_strategy(),
        age_band_strategy(),
    )
        .prop_map(|(code, premium, category, (min_age, max_age))| {
            TestRiderBuilder::new(code)
                .with_category(category)
                .with_premium(premium.amount())
                .with_min_age(min_age)
                .with_max_age(max_age)
                .build()
        })
}

/// Attached riders, some discounted
pub fn policy_rider_strategy() -> impl Strategy<Value = PolicyRider> {
    (rider_strategy(), proptest::option::of(discount_strategy())).prop_map(
        |(rider, discount)| {
            let builder = TestPolicyRiderBuilder::new(rider);
            match discount {
                Some(d) => builder.with_discount(d).build(),
                None => builder.build(),
            }
        },
    )
}
