//! Core Kernel - Foundational types shared by the rider desk crates
//!
//! - Money types with precise decimal arithmetic
//! - Business dates and an injectable clock
//! - Strongly typed identifiers

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError, Rate};
pub use temporal::{Clock, SystemClock, FixedClock, Timezone, TemporalError, add_months};
pub use identifiers::PolicyId;
pub use error::CoreError;
