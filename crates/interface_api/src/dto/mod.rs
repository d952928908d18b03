//! Request/response data transfer objects

pub mod rider;
pub mod policy_rider;
