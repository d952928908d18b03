//! Age-based eligibility gate
//!
//! A rider declares an optional minimum and maximum age. Both bounds are
//! inclusive and an absent bound places no restriction on that side, so a
//! rider with neither bound is open to every age.

use serde::{Deserialize, Serialize};

use crate::rider::Rider;

/// Outcome of checking a customer's age against a rider's age band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    Eligible,
    BelowMinimumAge { min_age: u32 },
    AboveMaximumAge { max_age: u32 },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    /// Human-readable reason for an ineligible outcome
    pub fn reason(&self) -> Option<String> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::BelowMinimumAge { min_age } => {
                Some(format!("minimum age is {}", min_age))
            }
            Eligibility::AboveMaximumAge { max_age } => {
                Some(format!("maximum age is {}", max_age))
            }
        }
    }
}

/// Checks `age` against the rider's age band
pub fn assess(rider: &Rider, age: u32) -> Eligibility {
    if let Some(min_age) = rider.min_age {
        if age < min_age {
            return Eligibility::BelowMinimumAge { min_age };
        }
    }
    if let Some(max_age) = rider.max_age {
        if age > max_age {
            return Eligibility::AboveMaximumAge { max_age };
        }
    }
    Eligibility::Eligible
}

/// Returns true when `min_age <= age <= max_age`, treating absent bounds as open
pub fn is_eligible(rider: &Rider, age: u32) -> bool {
    assess(rider, age).is_eligible()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Currency, Money};
    use rust_decimal_macros::dec;
    use crate::rider::{RiderCategory, RiderCode};

    fn rider(min_age: Option<u32>, max_age: Option<u32>) -> Rider {
        Rider::new(
            RiderCode::new("R1").unwrap(),
            "Term Rider",
            RiderCategory::Protection,
            Money::new(dec!(50000), Currency::USD),
            Money::new(dec!(500), Currency::USD),
        )
        .with_age_band(min_age, max_age)
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let r = rider(Some(18), Some(65));
        assert!(!is_eligible(&r, 17));
        assert!(is_eligible(&r, 18));
        assert!(is_eligible(&r, 65));
        assert!(!is_eligible(&r, 66));
    }

    #[test]
    fn test_open_bounds() {
        assert!(is_eligible(&rider(None, None), 0));
        assert!(is_eligible(&rider(None, None), u32::MAX));
        assert!(is_eligible(&rider(Some(21), None), 120));
        assert!(is_eligible(&rider(None, Some(60)), 0));
    }

    #[test]
    fn test_assess_reports_reason() {
        let r = rider(Some(18), Some(65));
        assert_eq!(assess(&r, 70), Eligibility::AboveMaximumAge { max_age: 65 });
        assert_eq!(assess(&r, 10), Eligibility::BelowMinimumAge { min_age: 18 });
        assert_eq!(assess(&r, 70).reason().unwrap(), "maximum age is 65");
        assert!(assess(&r, 30).reason().is_none());
    }
}
