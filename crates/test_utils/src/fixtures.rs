//! Pre-built Test Fixtures
//!
//! Ready-to-use riders, policies, catalogs, and dates. The rider fixtures
//! mirror the worked examples used across the test suites (R1, R2, R3).

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::{Currency, FixedClock, Money, PolicyId};
use domain_rider::{
    CatalogEntry, PolicyRef, Rider, RiderCatalog, RiderCategory, RiderCode, RiderService,
};
use rust_decimal_macros::dec;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard business date for attachments (Mar 15, 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Clock pinned to [`TemporalFixtures::today`]
    pub fn clock() -> FixedClock {
        FixedClock(Self::today())
    }
}

/// Fixture for riders
pub struct RiderFixtures;

impl RiderFixtures {
    /// R1: premium 500, ages 18 to 65
    pub fn r1() -> Rider {
        Rider::new(
            RiderCode::new("R1").unwrap(),
            "Accidental Death Benefit",
            RiderCategory::Accident,
            Money::new(dec!(100000), Currency::USD),
            Money::new(dec!(500), Currency::USD),
        )
        .with_age_band(Some(18), Some(65))
        .with_benefit("Additional sum assured on accidental death")
        .with_exclusion("Self-inflicted injury")
    }

    /// R2: premium 1200, no age band
    pub fn r2() -> Rider {
        Rider::new(
            RiderCode::new("R2").unwrap(),
            "Critical Illness Cover",
            RiderCategory::Health,
            Money::new(dec!(250000), Currency::USD),
            Money::new(dec!(1200), Currency::USD),
        )
        .with_waiting_period(3)
    }

    /// R3: premium 180, up to age 60
    pub fn r3() -> Rider {
        Rider::new(
            RiderCode::new("R3").unwrap(),
            "Waiver of Premium",
            RiderCategory::Premium,
            Money::zero(Currency::USD),
            Money::new(dec!(180), Currency::USD),
        )
        .with_age_band(None, Some(60))
    }

    /// R4: Savings rider offered on Term Life only
    pub fn r4() -> Rider {
        Rider::new(
            RiderCode::new("R4").unwrap(),
            "Return of Premium",
            RiderCategory::Savings,
            Money::zero(Currency::USD),
            Money::new(dec!(420), Currency::USD),
        )
        .with_age_band(Some(18), Some(50))
    }

    /// Catalog of R1 to R4 in that order
    ///
    /// R1 is offered on Term Life and Whole Life, R2 additionally on Health,
    /// R3 on every policy type, and R4 on Term Life only.
    pub fn catalog() -> RiderCatalog {
        RiderCatalog::new(
            Currency::USD,
            vec![
                CatalogEntry::new(Self::r1(), policy_types(&["Term Life", "Whole Life"])),
                CatalogEntry::new(Self::r2(), policy_types(&["Term Life", "Whole Life", "Health"])),
                CatalogEntry::new(Self::r3(), Vec::new()),
                CatalogEntry::new(Self::r4(), policy_types(&["Term Life"])),
            ],
        )
        .unwrap()
    }

    /// Service over [`RiderFixtures::catalog`] with a pinned clock
    pub fn service() -> RiderService {
        RiderService::new(Arc::new(Self::catalog()), Arc::new(TemporalFixtures::clock()))
    }
}

fn policy_types(types: &[&str]) -> Vec<String> {
    types.iter().map(|t| t.to_string()).collect()
}

/// Fixture for policies
pub struct PolicyFixtures;

impl PolicyFixtures {
    pub fn term_life() -> PolicyRef {
        PolicyRef::new(PolicyId::new(), "Term Life", "Priya Sharma")
    }

    pub fn health() -> PolicyRef {
        PolicyRef::new(PolicyId::new(), "Health", "Marcus Webb")
    }
}
