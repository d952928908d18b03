//! Rider catalog
//!
//! The catalog is an immutable value built once (from JSON or in code) and
//! handed to the services that need it. Riders keep their declaration order,
//! which is the order every lookup returns them in.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "currency": "USD",
//!   "riders": [
//!     {
//!       "code": "R1",
//!       "name": "Accidental Death Benefit",
//!       "category": "Accident",
//!       "rider_type": "Accidental Death",
//!       "coverage": "100000",
//!       "premium": "500",
//!       "min_age": 18,
//!       "max_age": 65,
//!       "policy_types": ["Term Life", "Whole Life"]
//!     }
//!   ]
//! }
//! ```
//!
//! An entry with an empty `policy_types` list applies to every policy type.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;

use core_kernel::{Currency, Money};
use crate::error::RiderError;
use crate::rider::{Rider, RiderCategory, RiderCode};

const STANDARD_CATALOG: &str = include_str!("../data/standard_catalog.json");

/// A catalog rider together with the policy types it can be added to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub rider: Rider,
    pub policy_types: Vec<String>,
}

impl CatalogEntry {
    pub fn new(rider: Rider, policy_types: Vec<String>) -> Self {
        Self { rider, policy_types }
    }

    /// Returns true if the rider may be added to a policy of `policy_type`
    pub fn applies_to(&self, policy_type: &str) -> bool {
        let wanted = policy_type.trim();
        self.policy_types.is_empty()
            || self
                .policy_types
                .iter()
                .any(|t| t.trim().eq_ignore_ascii_case(wanted))
    }
}

/// Immutable set of rider definitions in a single currency
#[derive(Debug, Clone)]
pub struct RiderCatalog {
    currency: Currency,
    entries: Vec<CatalogEntry>,
}

impl RiderCatalog {
    /// Builds a catalog, validating codes, age bands and currencies
    ///
    /// # Errors
    ///
    /// Returns [`RiderError::InvalidCatalog`] if two entries share a code, an
    /// age band is inverted, an amount is negative, or an amount is not in
    /// `currency`.
    pub fn new(currency: Currency, entries: Vec<CatalogEntry>) -> Result<Self, RiderError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            let rider = &entry.rider;
            if !seen.insert(rider.code.clone()) {
                return Err(RiderError::invalid_catalog(format!(
                    "duplicate rider code {}",
                    rider.code
                )));
            }
            if let (Some(min), Some(max)) = (rider.min_age, rider.max_age) {
                if min > max {
                    return Err(RiderError::invalid_catalog(format!(
                        "rider {} has min_age {} above max_age {}",
                        rider.code, min, max
                    )));
                }
            }
            for amount in rider.amounts() {
                if amount.currency() != currency {
                    return Err(RiderError::invalid_catalog(format!(
                        "rider {} is priced in {}, catalog currency is {}",
                        rider.code,
                        amount.currency(),
                        currency
                    )));
                }
                if amount.is_negative() {
                    return Err(RiderError::invalid_catalog(format!(
                        "rider {} has a negative amount",
                        rider.code
                    )));
                }
            }
        }
        Ok(Self { currency, entries })
    }

    /// Parses a catalog from its JSON document form
    pub fn from_json(json: &str) -> Result<Self, RiderError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        document.into_catalog()
    }

    /// The catalog shipped with the rider desk
    pub fn standard() -> Result<Self, RiderError> {
        Self::from_json(STANDARD_CATALOG)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All riders in declaration order
    pub fn riders(&self) -> impl Iterator<Item = &Rider> {
        self.entries.iter().map(|e| &e.rider)
    }

    pub fn get(&self, code: &str) -> Option<&Rider> {
        self.riders().find(|r| r.code == code)
    }

    /// Riders applicable to `policy_type`, in declaration order
    pub fn riders_for_policy_type(&self, policy_type: &str) -> Vec<&Rider> {
        self.entries
            .iter()
            .filter(|e| e.applies_to(policy_type))
            .map(|e| &e.rider)
            .collect()
    }

    pub fn by_category(&self, category: RiderCategory) -> Vec<&Rider> {
        self.riders().filter(|r| r.category == category).collect()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    currency: Currency,
    riders: Vec<CatalogRecord>,
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    code: RiderCode,
    name: String,
    category: RiderCategory,
    rider_type: Option<String>,
    coverage: Decimal,
    premium: Decimal,
    deductible: Option<Decimal>,
    min_age: Option<u32>,
    max_age: Option<u32>,
    waiting_period_months: Option<u32>,
    #[serde(default)]
    benefits: Vec<String>,
    #[serde(default)]
    exclusions: Vec<String>,
    #[serde(default)]
    terms: String,
    #[serde(default)]
    policy_types: Vec<String>,
}

impl CatalogDocument {
    fn into_catalog(self) -> Result<RiderCatalog, RiderError> {
        let currency = self.currency;
        let entries = self
            .riders
            .into_iter()
            .map(|r| {
                let rider = Rider {
                    rider_type: r.rider_type.unwrap_or_else(|| r.name.clone()),
                    code: r.code,
                    name: r.name,
                    category: r.category,
                    coverage: Money::new(r.coverage, currency),
                    premium: Money::new(r.premium, currency),
                    deductible: r.deductible.map(|d| Money::new(d, currency)),
                    min_age: r.min_age,
                    max_age: r.max_age,
                    waiting_period_months: r.waiting_period_months,
                    benefits: r.benefits,
                    exclusions: r.exclusions,
                    terms: r.terms,
                };
                CatalogEntry::new(rider, r.policy_types)
            })
            .collect();
        RiderCatalog::new(currency, entries)
    }
}
