//! Riders attached to a specific policy
//!
//! A [`PolicyRider`] owns a full copy of the catalog rider taken at
//! attachment time. Later catalog changes never reach it.
//!
//! # Status lifecycle
//!
//! ```text
//! Pending -> Active
//! ```
//!
//! There is no way back to Pending and no cancelled state; removing a rider
//! deletes the record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{add_months, Money, PolicyId};
use crate::error::RiderError;
use crate::premium;
use crate::rider::{Rider, RiderCode};

/// Status of an attached rider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiderStatus {
    Pending,
    Active,
}

impl fmt::Display for RiderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiderStatus::Pending => f.write_str("Pending"),
            RiderStatus::Active => f.write_str("Active"),
        }
    }
}

/// The parts of a policy the rider engine needs
///
/// Supplied by the caller; the engine never looks policies up itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRef {
    pub id: PolicyId,
    pub policy_type: String,
    /// Agent servicing the policy; recorded as `added_by` on attachment
    pub agent_name: String,
}

impl PolicyRef {
    pub fn new(id: PolicyId, policy_type: impl Into<String>, agent_name: impl Into<String>) -> Self {
        Self {
            id,
            policy_type: policy_type.into(),
            agent_name: agent_name.into(),
        }
    }
}

/// Policy-specific terms supplied when attaching a rider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachOptions {
    pub custom_terms: Option<String>,
    /// Percentage taken off the rider premium, `0..=100`
    pub discount_percentage: Option<Decimal>,
}

impl AttachOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom_terms(mut self, terms: impl Into<String>) -> Self {
        self.custom_terms = Some(terms.into());
        self
    }

    pub fn with_discount(mut self, percentage: Decimal) -> Self {
        self.discount_percentage = Some(percentage);
        self
    }

    /// Rejects discounts outside `0..=100`
    pub fn validate(&self) -> Result<(), RiderError> {
        match self.discount_percentage {
            Some(d) if d < Decimal::ZERO || d > Decimal::ONE_HUNDRED => {
                Err(RiderError::InvalidDiscount(d))
            }
            _ => Ok(()),
        }
    }
}

/// A rider attached to one policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRider {
    pub policy_id: PolicyId,
    /// Snapshot of the catalog rider at attachment time
    #[serde(flatten)]
    pub rider: Rider,
    pub added_date: NaiveDate,
    pub added_by: String,
    pub status: RiderStatus,
    pub effective_date: NaiveDate,
    pub custom_terms: Option<String>,
    pub discount_percentage: Option<Decimal>,
}

impl PolicyRider {
    /// Creates a Pending attachment effective on `today`
    ///
    /// Eligibility and duplicate checks are the caller's job; see
    /// [`crate::services::RiderService::attach_rider`].
    pub fn pending(policy: &PolicyRef, rider: &Rider, options: AttachOptions, today: NaiveDate) -> Self {
        Self {
            policy_id: policy.id,
            rider: rider.clone(),
            added_date: today,
            added_by: policy.agent_name.clone(),
            status: RiderStatus::Pending,
            effective_date: today,
            custom_terms: options.custom_terms,
            discount_percentage: options.discount_percentage,
        }
    }

    pub fn code(&self) -> &RiderCode {
        &self.rider.code
    }

    pub fn is_active(&self) -> bool {
        self.status == RiderStatus::Active
    }

    /// Moves the rider to Active; returns false if it already was
    pub fn activate(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.status = RiderStatus::Active;
        true
    }

    /// Premium after discount, rounded to the currency's minor units
    pub fn net_premium(&self) -> Money {
        premium::net_premium(&self.rider.premium, self.discount_percentage)
    }

    /// First day of cover, after any waiting period
    pub fn coverage_start_date(&self) -> Result<NaiveDate, RiderError> {
        match self.rider.waiting_period_months {
            Some(months) => Ok(add_months(self.effective_date, months)?),
            None => Ok(self.effective_date),
        }
    }
}
