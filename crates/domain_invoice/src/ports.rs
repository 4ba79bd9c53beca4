//! Remote collaborator ports
//!
//! The persistence and authentication service is consumed, not specified,
//! by this system: these traits are the whole contract. Adapters live in
//! `infra_remote` (REST) and in test doubles.
//!
//! Every mutation returns the collaborator's confirmed record so callers can
//! splice authoritative ids into their local state. No operation is retried
//! automatically; failures surface as [`PortError`] and leave the caller's
//! state untouched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, DomainPort, InvoiceId, PortError};
use domain_config::InvoiceConfig;

use crate::customer::{Customer, CustomerProfile};
use crate::invoice::Invoice;

/// The authenticated account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A successful login: the account plus its bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Login collaborator
#[async_trait]
pub trait AuthPort: DomainPort {
    /// Exchanges credentials for a session token
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, PortError>;
}

/// Invoice persistence
#[async_trait]
pub trait InvoicePort: DomainPort {
    async fn list(&self) -> Result<Vec<Invoice>, PortError>;

    async fn get(&self, id: &InvoiceId) -> Result<Invoice, PortError>;

    /// Saves a drafted invoice; the returned record carries the
    /// server-assigned id
    async fn create(&self, invoice: &Invoice) -> Result<Invoice, PortError>;

    /// Replaces the whole stored record
    async fn update(&self, id: &InvoiceId, invoice: &Invoice) -> Result<Invoice, PortError>;

    async fn delete(&self, id: &InvoiceId) -> Result<(), PortError>;
}

/// Customer persistence
#[async_trait]
pub trait CustomerPort: DomainPort {
    async fn list(&self) -> Result<Vec<Customer>, PortError>;

    async fn create(&self, profile: &CustomerProfile) -> Result<Customer, PortError>;

    async fn update(
        &self,
        id: &CustomerId,
        profile: &CustomerProfile,
    ) -> Result<Customer, PortError>;

    async fn delete(&self, id: &CustomerId) -> Result<(), PortError>;
}

/// Settings persistence (a singleton record per tenant)
#[async_trait]
pub trait SettingsPort: DomainPort {
    async fn load(&self) -> Result<InvoiceConfig, PortError>;

    async fn save(&self, config: &InvoiceConfig) -> Result<(), PortError>;
}
