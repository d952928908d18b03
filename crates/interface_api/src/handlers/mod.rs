//! Request handlers

pub mod health;
pub mod riders;
pub mod policy_riders;
