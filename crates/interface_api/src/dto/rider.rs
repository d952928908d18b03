//! Catalog rider DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_rider::{Rider, RiderCategory};

/// Query string for catalog lookups
#[derive(Debug, Default, Deserialize)]
pub struct RiderQuery {
    pub policy_type: Option<String>,
    /// When set, only riders open to this age are returned
    pub customer_age: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RiderResponse {
    pub code: String,
    pub name: String,
    pub category: RiderCategory,
    pub rider_type: String,
    pub currency: String,
    pub coverage: Decimal,
    pub premium: Decimal,
    pub deductible: Option<Decimal>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub waiting_period_months: Option<u32>,
    pub benefits: Vec<String>,
    pub exclusions: Vec<String>,
    pub terms: String,
}

impl From<&Rider> for RiderResponse {
    fn from(rider: &Rider) -> Self {
        Self {
            code: rider.code.to_string(),
            name: rider.name.clone(),
            category: rider.category,
            rider_type: rider.rider_type.clone(),
            currency: rider.premium.currency().to_string(),
            coverage: rider.coverage.amount(),
            premium: rider.premium.amount(),
            deductible: rider.deductible.map(|d| d.amount()),
            min_age: rider.min_age,
            max_age: rider.max_age,
            waiting_period_months: rider.waiting_period_months,
            benefits: rider.benefits.clone(),
            exclusions: rider.exclusions.clone(),
            terms: rider.terms.clone(),
        }
    }
}
