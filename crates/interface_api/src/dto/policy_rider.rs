//! Policy rider DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_rider::{AttachOptions, PolicyRider, RiderStatus, RiderSummary};

use crate::dto::rider::RiderResponse;
use crate::error::ApiError;

#[derive(Debug, Deserialize, Validate)]
pub struct AttachRiderRequest {
    #[validate(length(min = 1, max = 100))]
    pub policy_type: String,
    #[validate(length(min = 1, max = 200))]
    pub agent_name: String,
    #[validate(length(min = 1, max = 50))]
    pub rider_code: String,
    /// Any age is accepted here; the rider's own age band decides
    pub customer_age: u32,
    #[validate(length(max = 4000))]
    pub custom_terms: Option<String>,
    pub discount_percentage: Option<Decimal>,
}

impl AttachRiderRequest {
    pub fn options(&self) -> AttachOptions {
        AttachOptions {
            custom_terms: self.custom_terms.clone(),
            discount_percentage: self.discount_percentage,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PolicyRiderResponse {
    #[serde(flatten)]
    pub rider: RiderResponse,
    pub policy_id: Uuid,
    pub status: RiderStatus,
    pub added_date: NaiveDate,
    pub added_by: String,
    pub effective_date: NaiveDate,
    pub coverage_start_date: NaiveDate,
    pub custom_terms: Option<String>,
    pub discount_percentage: Option<Decimal>,
    pub net_premium: Decimal,
}

impl TryFrom<&PolicyRider> for PolicyRiderResponse {
    type Error = ApiError;

    fn try_from(pr: &PolicyRider) -> Result<Self, Self::Error> {
        Ok(Self {
            rider: RiderResponse::from(&pr.rider),
            policy_id: *pr.policy_id.as_uuid(),
            status: pr.status,
            added_date: pr.added_date,
            added_by: pr.added_by.clone(),
            effective_date: pr.effective_date,
            coverage_start_date: pr.coverage_start_date()?,
            custom_terms: pr.custom_terms.clone(),
            discount_percentage: pr.discount_percentage,
            net_premium: pr.net_premium().amount(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PolicyRidersResponse {
    pub policy_id: Uuid,
    pub riders: Vec<PolicyRiderResponse>,
    pub summary: RiderSummary,
}
