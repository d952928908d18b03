//! Rider Catalog & Eligibility Engine
//!
//! Riders are optional coverage add-ons that an agent attaches to a policy.
//! This crate holds the rules behind the policy-rider screens:
//!
//! - **Catalog**: immutable rider definitions and the policy types they apply to
//! - **Eligibility**: the inclusive age-band gate
//! - **Premium**: discounted per-rider premium and policy totals
//! - **Lifecycle**: attach (Pending), activate (Active), remove
//!
//! # Rider Lifecycle
//!
//! ```text
//! (catalog) --attach--> Pending --activate--> Active
//!                          \                    \
//!                           \--remove--> (gone)  \--remove--> (gone)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rider::{RiderCatalog, RiderService, PolicyRef, AttachOptions};
//!
//! let catalog = Arc::new(RiderCatalog::standard()?);
//! let mut service = RiderService::new(catalog, Arc::new(SystemClock::default()));
//!
//! let policy = PolicyRef::new(policy_id, "Term Life", "Priya Sharma");
//! service.attach_by_code(&policy, "CI-01", 42, AttachOptions::new().with_discount(dec!(10)))?;
//! let total = service.total_premium(&policy.id)?;
//! ```

pub mod rider;
pub mod policy_rider;
pub mod catalog;
pub mod eligibility;
pub mod premium;
pub mod lifecycle;
pub mod services;
pub mod error;

pub use rider::{Rider, RiderCategory, RiderCode};
pub use policy_rider::{AttachOptions, PolicyRef, PolicyRider, RiderStatus};
pub use catalog::{CatalogEntry, RiderCatalog};
pub use eligibility::{is_eligible, Eligibility};
pub use premium::{net_premium, total_premium, RiderSummary};
pub use lifecycle::{activate_rider, remove_rider};
pub use services::RiderService;
pub use error::RiderError;
