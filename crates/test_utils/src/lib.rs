//! Test Utilities Crate
//!
//! Shared builders, fixtures, and property-test generators for the invoice
//! system test suite.
//!
//! # Modules
//!
//! - `builders`: builder patterns for invoices, items, and customers
//! - `fixtures`: ready-made records with predictable values
//! - `generators`: proptest strategies for domain values

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::*;
pub use fixtures::*;
