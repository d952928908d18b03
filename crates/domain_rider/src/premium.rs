//! Rider premium aggregation
//!
//! Each attached rider contributes `premium * (1 - discount / 100)`, or the
//! plain premium when no discount was given. A contribution is rounded half
//! away from zero to the currency's minor units before it is summed, so the
//! total always equals the sum of the per-rider figures shown to the user.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{Currency, Money, Rate};
use crate::error::RiderError;
use crate::policy_rider::{PolicyRider, RiderStatus};
use crate::rider::RiderCategory;

/// Premium after an optional percentage discount, rounded to minor units
pub fn net_premium(premium: &Money, discount_percentage: Option<Decimal>) -> Money {
    match discount_percentage {
        Some(pct) => Rate::from_percentage(pct).discount(premium),
        None => premium.round_to_currency(),
    }
}

/// Sums the net premium of every rider; zero for an empty slice
///
/// # Errors
///
/// Returns [`RiderError::Money`] if a rider is priced in another currency.
pub fn total_premium(riders: &[PolicyRider], currency: Currency) -> Result<Money, RiderError> {
    let contributions: Vec<Money> = riders.iter().map(PolicyRider::net_premium).collect();
    Ok(Money::checked_sum(&contributions, currency)?)
}

/// Roll-up of a policy's riders for the overview cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiderSummary {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub total_coverage: Money,
    pub total_premium: Money,
    pub by_category: BTreeMap<RiderCategory, usize>,
}

impl RiderSummary {
    pub fn from_riders(riders: &[PolicyRider], currency: Currency) -> Result<Self, RiderError> {
        let active = riders.iter().filter(|r| r.status == RiderStatus::Active).count();
        let coverages: Vec<Money> = riders.iter().map(|r| r.rider.coverage).collect();

        let mut by_category = BTreeMap::new();
        for r in riders {
            *by_category.entry(r.rider.category).or_insert(0) += 1;
        }

        Ok(Self {
            total: riders.len(),
            active,
            pending: riders.len() - active,
            total_coverage: Money::checked_sum(&coverages, currency)?,
            total_premium: total_premium(riders, currency)?,
            by_category,
        })
    }
}
