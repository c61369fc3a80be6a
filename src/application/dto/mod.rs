//! Data Transfer Objects
//!
//! Structures handed across the application boundary to transports.

pub mod report;

pub use report::{FinalReport, LengthGroup};
