//! Application layer for route-optimizer

pub mod config;
pub mod fleet;
pub mod planner;

pub use config::Config;
pub use planner::{LocationField, LocationSlot, PlannerForm};
