//! Test Data Builders
//!
//! Builders with sensible defaults so tests only spell out the fields they
//! care about.

use chrono::NaiveDate;
use core_kernel::{Currency, Money, PolicyId};
use domain_rider::{AttachOptions, PolicyRef, PolicyRider, Rider, RiderCategory, RiderCode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::TemporalFixtures;

/// Builder for catalog riders
pub struct TestRiderBuilder {
    code: String,
    name: String,
    category: RiderCategory,
    coverage: Money,
    premium: Money,
    min_age: Option<u32>,
    max_age: Option<u32>,
    waiting_period_months: Option<u32>,
}

impl Default for TestRiderBuilder {
    fn default() -> Self {
        Self::new("TEST")
    }
}

impl TestRiderBuilder {
    /// Creates a builder for a USD 100 protection rider with no age band
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            name: format!("Test Rider {}", code),
            code,
            category: RiderCategory::Protection,
            coverage: Money::new(dec!(10000), Currency::USD),
            premium: Money::new(dec!(100), Currency::USD),
            min_age: None,
            max_age: None,
            waiting_period_months: None,
        }
    }

    pub fn with_category(mut self, category: RiderCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.premium = Money::new(premium, self.premium.currency());
        self
    }

    pub fn with_coverage(mut self, coverage: Decimal) -> Self {
        self.coverage = Money::new(coverage, self.coverage.currency());
        self
    }

    pub fn with_min_age(mut self, age: u32) -> Self {
        self.min_age = Some(age);
        self
    }

    pub fn with_max_age(mut self, age: u32) -> Self {
        self.max_age = Some(age);
        self
    }

    pub fn with_waiting_period(mut self, months: u32) -> Self {
        self.waiting_period_months = Some(months);
        self
    }

    pub fn build(self) -> Rider {
        let mut rider = Rider::new(
            RiderCode::new(self.code).unwrap(),
            self.name,
            self.category,
            self.coverage,
            self.premium,
        )
        .with_age_band(self.min_age, self.max_age);
        rider.waiting_period_months = self.waiting_period_months;
        rider
    }
}

/// Builder for already-attached riders
pub struct TestPolicyRiderBuilder {
    policy: PolicyRef,
    rider: Rider,
    options: AttachOptions,
    date: NaiveDate,
    active: bool,
}

impl TestPolicyRiderBuilder {
    pub fn new(rider: Rider) -> Self {
        Self {
            policy: PolicyRef::new(PolicyId::new(), "Term Life", "Test Agent"),
            rider,
            options: AttachOptions::new(),
            date: TemporalFixtures::today(),
            active: false,
        }
    }

    pub fn for_policy(mut self, policy: PolicyRef) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_discount(mut self, percentage: Decimal) -> Self {
        self.options = self.options.with_discount(percentage);
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn build(self) -> PolicyRider {
        let mut attached = PolicyRider::pending(&self.policy, &self.rider, self.options, self.date);
        if self.active {
            attached.activate();
        }
        attached
    }
}
