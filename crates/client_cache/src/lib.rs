//! Session-Scoped Record Caches
//!
//! Local working copies of the remote collaborator's records, one cache per
//! collection. The remote record is always authoritative: mutations await the
//! collaborator and splice only its confirmed record into the local list, so
//! a failed write leaves the cache exactly as it was.
//!
//! Refreshes degrade instead of failing. When the collaborator is
//! unreachable, the invoice cache falls back to built-in sample records, the
//! customer cache to an empty list, and the settings cache to the default
//! configuration, each raising its error flag so the caller can tell cached
//! truth from fallback.
//!
//! Everything here runs on the caller's task. There are no background
//! refreshes, no retries, and no client-side conflict detection.

mod customers;
mod error;
mod invoices;
pub mod samples;
pub mod session;
mod settings;

pub use customers::CustomerCache;
pub use error::CacheError;
pub use invoices::InvoiceCache;
pub use session::{Session, SessionState};
pub use settings::SettingsCache;
