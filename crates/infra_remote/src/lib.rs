//! Remote Collaborator Adapter
//!
//! Implements the four domain ports against the collaborator's REST API.
//! One [`HttpClient`] carries the base URL, the request timeout, and the
//! session's bearer token; the adapters are thin per-collection wrappers
//! over it that unwrap the API's response envelopes.
//!
//! HTTP failures map onto [`core_kernel::PortError`]: 404 to `NotFound`,
//! 401/403 to `Unauthorized`, 429 and 5xx to `ServiceUnavailable`, client
//! timeouts to `Timeout`, and transport faults to `Connection`. Nothing is
//! retried here.

mod adapters;
mod config;
mod http;

pub use adapters::{
    RemoteAuthAdapter, RemoteCustomerAdapter, RemoteInvoiceAdapter, RemoteSettingsAdapter,
};
pub use config::RemoteConfig;
pub use http::HttpClient;
