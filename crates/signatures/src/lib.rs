//! Signature Engine - composite service detection from open port sets
//!
//! This crate provides:
//! - The signature catalog (built-in table or a JSON file)
//! - Set-membership matching of signatures against a port set
//! - Report building in catalog order

mod catalog;
mod matcher;
mod report;

pub use catalog::SignatureCatalog;
pub use matcher::{matches, missing_optional, present_optional};
pub use report::build_report;
