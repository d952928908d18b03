//! Rider management service
//!
//! [`RiderService`] is what the policy-rider screens talk to. It is built
//! from an immutable catalog and a clock, and keeps the riders attached to
//! each policy in memory, in attachment order.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use core_kernel::{Clock, Money, MoneyError, PolicyId};
use crate::catalog::RiderCatalog;
use crate::error::RiderError;
use crate::lifecycle;
use crate::policy_rider::{AttachOptions, PolicyRef, PolicyRider};
use crate::premium::{self, RiderSummary};
use crate::rider::{Rider, RiderCode};

/// Catalog lookups plus the attach / activate / remove lifecycle
///
/// Every failing operation returns before touching the attachment book.
pub struct RiderService {
    catalog: Arc<RiderCatalog>,
    clock: Arc<dyn Clock>,
    attachments: HashMap<PolicyId, Vec<PolicyRider>>,
}

impl RiderService {
    /// Creates a service with an empty attachment book
    ///
    /// # Arguments
    ///
    /// * `catalog` - The rider definitions offered to policies
    /// * `clock` - Source of the attachment and effective dates
    pub fn new(catalog: Arc<RiderCatalog>, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog,
            clock,
            attachments: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &RiderCatalog {
        &self.catalog
    }

    /// Catalog riders that can be added to a policy of `policy_type`
    pub fn riders_for_policy_type(&self, policy_type: &str) -> Vec<&Rider> {
        self.catalog.riders_for_policy_type(policy_type)
    }

    /// Riders attached to the policy, in attachment order
    pub fn riders_for_policy(&self, policy_id: &PolicyId) -> &[PolicyRider] {
        self.attachments
            .get(policy_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Riders the "add rider" dialog should offer
    ///
    /// Applicable to the policy type, open to `customer_age`, and not yet
    /// attached to the policy.
    pub fn available_riders(&self, policy: &PolicyRef, customer_age: u32) -> Vec<&Rider> {
        let attached = self.riders_for_policy(&policy.id);
        self.catalog
            .riders_for_policy_type(&policy.policy_type)
            .into_iter()
            .filter(|r| r.is_eligible(customer_age))
            .filter(|r| !lifecycle::is_attached(attached, &r.code))
            .collect()
    }

    /// Attaches `rider` to `policy` as a Pending rider effective today
    ///
    /// # Errors
    ///
    /// * [`RiderError::InvalidDiscount`] - discount outside `0..=100`
    /// * [`RiderError::AlreadyAttached`] - the policy already has this rider
    /// * [`RiderError::NotEligible`] - `customer_age` is outside the age band
    /// * [`RiderError::Money`] - a coverage, premium or deductible amount is not
    ///   in the catalog currency
    pub fn attach_rider(
        &mut self,
        policy: &PolicyRef,
        rider: &Rider,
        customer_age: u32,
        options: AttachOptions,
    ) -> Result<PolicyRider, RiderError> {
        options.validate()?;

        if lifecycle::is_attached(self.riders_for_policy(&policy.id), &rider.code) {
            warn!(policy_id = %policy.id, rider = %rider.code, "Rider already attached");
            return Err(RiderError::AlreadyAttached {
                rider: rider.code.clone(),
                policy: policy.id,
            });
        }

        let eligibility = rider.assess(customer_age);
        if let Some(reason) = eligibility.reason() {
            warn!(
                policy_id = %policy.id,
                rider = %rider.code,
                customer_age,
                %reason,
                "Rider rejected on eligibility"
            );
            return Err(RiderError::NotEligible {
                rider: rider.code.clone(),
                age: customer_age,
                reason,
            });
        }

        let currency = self.catalog.currency();
        if let Some(foreign) = rider.amounts().find(|m| m.currency() != currency) {
            warn!(
                policy_id = %policy.id,
                rider = %rider.code,
                currency = %foreign.currency(),
                "Rider not priced in catalog currency"
            );
            return Err(MoneyError::CurrencyMismatch(
                currency.to_string(),
                foreign.currency().to_string(),
            )
            .into());
        }

        let attached = PolicyRider::pending(policy, rider, options, self.clock.today());
        self.attachments
            .entry(policy.id)
            .or_default()
            .push(attached.clone());

        info!(
            policy_id = %policy.id,
            rider = %rider.code,
            added_by = %attached.added_by,
            net_premium = %attached.net_premium(),
            "Rider attached"
        );
        Ok(attached)
    }

    /// Looks `code` up in the catalog and attaches it
    ///
    /// # Errors
    ///
    /// [`RiderError::UnknownRider`] if the catalog has no such rider, plus
    /// everything [`RiderService::attach_rider`] can return.
    pub fn attach_by_code(
        &mut self,
        policy: &PolicyRef,
        code: &str,
        customer_age: u32,
        options: AttachOptions,
    ) -> Result<PolicyRider, RiderError> {
        let catalog = Arc::clone(&self.catalog);
        let rider = catalog
            .get(code.trim())
            .ok_or_else(|| RiderError::unknown_rider(code))?;
        self.attach_rider(policy, rider, customer_age, options)
    }

    /// Moves an attached rider from Pending to Active
    ///
    /// Re-activating an Active rider returns it unchanged.
    pub fn activate_rider(
        &mut self,
        policy_id: &PolicyId,
        code: &RiderCode,
    ) -> Result<PolicyRider, RiderError> {
        let current = self.riders_for_policy(policy_id).to_vec();
        let updated = lifecycle::activate_rider(current, code).map_err(|e| {
            warn!(policy_id = %policy_id, rider = %code, "Activation of unattached rider");
            e
        })?;

        let activated = updated
            .iter()
            .find(|r| r.code() == code)
            .cloned()
            .ok_or_else(|| RiderError::NotFound(code.clone()))?;
        self.attachments.insert(*policy_id, updated);

        info!(policy_id = %policy_id, rider = %code, "Rider active");
        Ok(activated)
    }

    /// Deletes an attached rider; returns false if it was not attached
    pub fn remove_rider(&mut self, policy_id: &PolicyId, code: &RiderCode) -> bool {
        let Some(current) = self.attachments.remove(policy_id) else {
            debug!(policy_id = %policy_id, rider = %code, "Remove on policy without riders");
            return false;
        };

        let before = current.len();
        let remaining = lifecycle::remove_rider(current, code);
        let removed = remaining.len() < before;
        if !remaining.is_empty() {
            self.attachments.insert(*policy_id, remaining);
        }

        if removed {
            info!(policy_id = %policy_id, rider = %code, "Rider removed");
        }
        removed
    }

    /// Net premium of all riders on the policy
    pub fn total_premium(&self, policy_id: &PolicyId) -> Result<Money, RiderError> {
        premium::total_premium(self.riders_for_policy(policy_id), self.catalog.currency())
    }

    pub fn summary(&self, policy_id: &PolicyId) -> Result<RiderSummary, RiderError> {
        RiderSummary::from_riders(self.riders_for_policy(policy_id), self.catalog.currency())
    }
}
