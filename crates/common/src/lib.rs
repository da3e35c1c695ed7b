//! Nsight Common - Shared types and traits
//!
//! This crate provides the data model used across the nsight workspace:
//! - Port sets observed open on a host
//! - Composite service signatures and their match outcomes
//! - The error type shared by the library crates
//! - The `PortSource` seam implemented by report parsers

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{NsightError, NsightResult};
pub use traits::PortSource;
pub use types::{MatchOutcome, Port, PortSet, Report, Signature};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
