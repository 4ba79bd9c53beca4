//! Invoice Domain - canonical records and the computation engine
//!
//! This crate owns the invoice and customer data model, the arithmetic that
//! keeps line-item and invoice totals consistent with edits, and the port
//! traits describing what the remote collaborator must provide.
//!
//! # Computation rules
//!
//! Line items store `weight` and `price` as the text the user typed; numbers
//! are parsed out only to materialize `total = weight * price`. Parse
//! failures coerce to zero rather than surfacing as errors.
//! Invoice-level `subtotal` and `grand_total`
//! are a pure fold over item totals and are always equal; templates merely
//! label them differently.

pub mod compute;
pub mod customer;
pub mod invoice;
pub mod ports;

pub use compute::{apply_edit, recompute_item, recompute_totals, Totals};
pub use customer::{Customer, CustomerProfile};
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus};
pub use ports::{AuthPort, AuthSession, CustomerPort, InvoicePort, SettingsPort, User};
