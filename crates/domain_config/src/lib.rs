//! Configuration Domain - field configuration and tenant invoice settings
//!
//! This crate holds the user-editable configuration that shapes how invoices
//! are composed and rendered:
//!
//! - **Field configuration**: which line-item columns exist and how they are
//!   labeled, in a fixed canonical order, with the `total` column permanently
//!   enabled.
//! - **Template selection**: the closed set of six document layouts and the
//!   tenant's default.
//! - **Tenant profiles**: business identity, bank details, and invoice
//!   defaults copied onto each newly drafted invoice.
//!
//! Exactly one [`InvoiceConfig`] exists per authenticated session; it resets
//! to the built-in defaults when no session is active.

pub mod config;
pub mod fields;
pub mod template;

pub use config::{BankProfile, BusinessProfile, InvoiceConfig, InvoiceDefaults};
pub use fields::{FieldConfiguration, FieldDescriptor, InvoiceField};
pub use template::TemplateKind;
