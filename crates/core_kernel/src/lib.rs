//! Core Kernel - Foundational types and utilities for the invoice system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Opaque, server-assigned record identifiers
//! - Amount formatting (grouped currency strings and amount-in-words)
//! - Common error types and port abstractions for remote collaborators

pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;
pub mod words;

pub use error::CoreError;
pub use identifiers::{CustomerId, InvoiceId, ItemId};
pub use money::{format_currency, format_plain};
pub use ports::{DomainPort, PortError};
pub use words::amount_in_words;
