//! Rider definitions
//!
//! A rider is an optional coverage add-on defined independently of any
//! policy. Catalog riders are immutable values; attaching one to a policy
//! takes a snapshot (see [`crate::policy_rider::PolicyRider`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::Money;
use crate::eligibility::{self, Eligibility};
use crate::error::RiderError;

/// Catalog code identifying a rider, such as `"R1"` or `"CI-100"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RiderCode(String);

impl RiderCode {
    /// Creates a rider code, rejecting blank input
    pub fn new(code: impl Into<String>) -> Result<Self, RiderError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(RiderError::invalid_catalog("rider code must not be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RiderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RiderCode {
    type Err = RiderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RiderCode {
    type Error = RiderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RiderCode> for String {
    fn from(code: RiderCode) -> String {
        code.0
    }
}

impl PartialEq<str> for RiderCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RiderCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Rider categories shown on the rider management screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiderCategory {
    Protection,
    Health,
    Savings,
    Accident,
    Premium,
}

impl RiderCategory {
    pub const ALL: [RiderCategory; 5] = [
        RiderCategory::Protection,
        RiderCategory::Health,
        RiderCategory::Savings,
        RiderCategory::Accident,
        RiderCategory::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiderCategory::Protection => "Protection",
            RiderCategory::Health => "Health",
            RiderCategory::Savings => "Savings",
            RiderCategory::Accident => "Accident",
            RiderCategory::Premium => "Premium",
        }
    }
}

impl fmt::Display for RiderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiderCategory {
    type Err = RiderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RiderCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RiderError::invalid_catalog(format!("unknown rider category: {}", s)))
    }
}

/// An optional coverage add-on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rider {
    pub code: RiderCode,
    pub name: String,
    pub category: RiderCategory,
    /// Free-form product label, e.g. "Critical Illness"
    pub rider_type: String,
    /// Coverage amount paid out under the rider
    pub coverage: Money,
    /// Periodic premium charged for the rider
    pub premium: Money,
    pub deductible: Option<Money>,
    /// Youngest eligible age, inclusive
    pub min_age: Option<u32>,
    /// Oldest eligible age, inclusive
    pub max_age: Option<u32>,
    /// Months after the effective date before cover begins
    pub waiting_period_months: Option<u32>,
    pub benefits: Vec<String>,
    pub exclusions: Vec<String>,
    pub terms: String,
}

impl Rider {
    /// Creates a rider with no age band, waiting period, or deductible
    pub fn new(
        code: RiderCode,
        name: impl Into<String>,
        category: RiderCategory,
        coverage: Money,
        premium: Money,
    ) -> Self {
        let name = name.into();
        Self {
            code,
            rider_type: name.clone(),
            name,
            category,
            coverage,
            premium,
            deductible: None,
            min_age: None,
            max_age: None,
            waiting_period_months: None,
            benefits: Vec::new(),
            exclusions: Vec::new(),
            terms: String::new(),
        }
    }

    /// Restricts the rider to ages `min..=max`
    pub fn with_age_band(mut self, min_age: Option<u32>, max_age: Option<u32>) -> Self {
        self.min_age = min_age;
        self.max_age = max_age;
        self
    }

    pub fn with_waiting_period(mut self, months: u32) -> Self {
        self.waiting_period_months = Some(months);
        self
    }

    pub fn with_deductible(mut self, deductible: Money) -> Self {
        self.deductible = Some(deductible);
        self
    }

    pub fn with_rider_type(mut self, rider_type: impl Into<String>) -> Self {
        self.rider_type = rider_type.into();
        self
    }

    pub fn with_benefit(mut self, benefit: impl Into<String>) -> Self {
        self.benefits.push(benefit.into());
        self
    }

    pub fn with_exclusion(mut self, exclusion: impl Into<String>) -> Self {
        self.exclusions.push(exclusion.into());
        self
    }

    pub fn with_terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }

    /// Coverage, premium and deductible, whichever are present
    pub fn amounts(&self) -> impl Iterator<Item = &Money> {
        [Some(&self.coverage), Some(&self.premium), self.deductible.as_ref()]
            .into_iter()
            .flatten()
    }

    /// Returns true if a customer of `age` may take this rider
    pub fn is_eligible(&self, age: u32) -> bool {
        eligibility::is_eligible(self, age)
    }

    /// Returns the full eligibility outcome for `age`
    pub fn assess(&self, age: u32) -> Eligibility {
        eligibility::assess(self, age)
    }
}
