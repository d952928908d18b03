//! Status changes and removal over a policy's rider list
//!
//! These functions take the list by value and hand back the new list, so a
//! caller holding the previous list is never affected by a failed call.

use crate::error::RiderError;
use crate::policy_rider::PolicyRider;
use crate::rider::RiderCode;

/// Marks the rider with `code` Active
///
/// Activating a rider that is already Active changes nothing.
///
/// # Errors
///
/// Returns [`RiderError::NotFound`] if no rider in the list has `code`.
pub fn activate_rider(
    mut riders: Vec<PolicyRider>,
    code: &RiderCode,
) -> Result<Vec<PolicyRider>, RiderError> {
    let rider = riders
        .iter_mut()
        .find(|r| r.code() == code)
        .ok_or_else(|| RiderError::NotFound(code.clone()))?;
    rider.activate();
    Ok(riders)
}

/// Drops the rider with `code`; an unknown code leaves the list as it was
pub fn remove_rider(mut riders: Vec<PolicyRider>, code: &RiderCode) -> Vec<PolicyRider> {
    riders.retain(|r| r.code() != code);
    riders
}

/// Returns true if the list already holds a rider with `code`
pub fn is_attached(riders: &[PolicyRider], code: &RiderCode) -> bool {
    riders.iter().any(|r| r.code() == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{Currency, Money, PolicyId};
    use rust_decimal_macros::dec;
    use crate::policy_rider::{AttachOptions, PolicyRef, RiderStatus};
    use crate::rider::{Rider, RiderCategory};

    fn attached(codes: &[&str]) -> Vec<PolicyRider> {
        let policy = PolicyRef::new(PolicyId::new(), "Term Life", "A. Agent");
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        codes
            .iter()
            .map(|c| {
                let rider = Rider::new(
                    RiderCode::new(*c).unwrap(),
                    *c,
                    RiderCategory::Protection,
                    Money::new(dec!(1000), Currency::USD),
                    Money::new(dec!(10), Currency::USD),
                );
                PolicyRider::pending(&policy, &rider, AttachOptions::new(), today)
            })
            .collect()
    }

    fn code(s: &str) -> RiderCode {
        RiderCode::new(s).unwrap()
    }

    #[test]
    fn test_activate_only_touches_match() {
        let riders = activate_rider(attached(&["R1", "R2"]), &code("R2")).unwrap();
        assert_eq!(riders[0].status, RiderStatus::Pending);
        assert_eq!(riders[1].status, RiderStatus::Active);
    }

    #[test]
    fn test_activate_twice_is_noop() {
        let once = activate_rider(attached(&["R3"]), &code("R3")).unwrap();
        let twice = activate_rider(once.clone(), &code("R3")).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_activate_missing_is_not_found() {
        let result = activate_rider(attached(&["R1"]), &code("R9"));
        assert!(matches!(result, Err(RiderError::NotFound(c)) if c == "R9"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let riders = remove_rider(attached(&["R1", "R2", "R3"]), &code("R2"));
        let codes: Vec<&str> = riders.iter().map(|r| r.code().as_str()).collect();
        assert_eq!(codes, vec!["R1", "R3"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let before = attached(&["R1"]);
        let after = remove_rider(before.clone(), &code("R9"));
        assert_eq!(before, after);
    }
}
