//! Rider domain errors
//!
//! Every failure here is a local validation failure. None of them are
//! retryable and none leave a policy's rider list modified.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{MoneyError, PolicyId, TemporalError};
use crate::rider::RiderCode;

/// Errors that can occur in the rider domain
#[derive(Debug, Error)]
pub enum RiderError {
    /// The policy already carries a rider with this code
    #[error("Rider {rider} is already attached to policy {policy}")]
    AlreadyAttached {
        rider: RiderCode,
        policy: PolicyId,
    },

    /// The customer's age falls outside the rider's age band
    #[error("Rider {rider} is not available at age {age}: {reason}")]
    NotEligible {
        rider: RiderCode,
        age: u32,
        reason: String,
    },

    /// No attached rider with this code
    #[error("Rider {0} is not attached")]
    NotFound(RiderCode),

    /// No catalog rider with this code
    #[error("Unknown rider: {0}")]
    UnknownRider(String),

    /// Discount outside 0..=100 percent
    #[error("Invalid discount percentage: {0}")]
    InvalidDiscount(Decimal),

    /// Catalog data failed validation or could not be parsed
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Date error: {0}")]
    Temporal(#[from] TemporalError),
}

impl RiderError {
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        RiderError::InvalidCatalog(reason.into())
    }

    pub fn unknown_rider(code: impl std::fmt::Display) -> Self {
        RiderError::UnknownRider(code.to_string())
    }
}

impl From<serde_json::Error> for RiderError {
    fn from(err: serde_json::Error) -> Self {
        RiderError::InvalidCatalog(err.to_string())
    }
}
