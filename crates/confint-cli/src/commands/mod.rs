//! Command implementations.

pub mod estimate;

pub use self::estimate::{execute_estimate, resolve_precision, EstimateRequest};
