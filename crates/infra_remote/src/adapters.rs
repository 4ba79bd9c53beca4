//! Port implementations over the REST API
//!
//! Each adapter unwraps the collaborator's response envelope and hands the
//! record back unchanged. Login additionally stores the returned bearer
//! token on the shared client so subsequent calls carry it.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use core_kernel::{CustomerId, DomainPort, InvoiceId, PortError};
use domain_config::InvoiceConfig;
use domain_invoice::ports::{AuthPort, AuthSession, CustomerPort, InvoicePort, SettingsPort};
use domain_invoice::{Customer, CustomerProfile, Invoice};

use crate::http::HttpClient;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct InvoiceListEnvelope {
    #[serde(default)]
    invoices: Vec<Invoice>,
}

#[derive(Deserialize)]
struct InvoiceEnvelope {
    invoice: Invoice,
}

#[derive(Deserialize)]
struct CustomerListEnvelope {
    #[serde(default)]
    customers: Vec<Customer>,
}

#[derive(Deserialize)]
struct CustomerEnvelope {
    customer: Customer,
}

#[derive(Deserialize)]
struct SettingsEnvelope {
    settings: Option<InvoiceConfig>,
}

/// `/auth/login` adapter
pub struct RemoteAuthAdapter {
    client: Arc<HttpClient>,
}

impl RemoteAuthAdapter {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

impl DomainPort for RemoteAuthAdapter {}

#[async_trait]
impl AuthPort for RemoteAuthAdapter {
    #[instrument(skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, PortError> {
        let session: AuthSession = self
            .client
            .post("/auth/login", &LoginRequest { email, password })
            .await?;
        self.client.set_token(session.token.clone());
        Ok(session)
    }
}

/// `/invoices` adapter
pub struct RemoteInvoiceAdapter {
    client: Arc<HttpClient>,
}

impl RemoteInvoiceAdapter {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

impl DomainPort for RemoteInvoiceAdapter {}

#[async_trait]
impl InvoicePort for RemoteInvoiceAdapter {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Invoice>, PortError> {
        let envelope: InvoiceListEnvelope = self.client.get("/invoices").await?;
        Ok(envelope.invoices)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &InvoiceId) -> Result<Invoice, PortError> {
        let envelope: InvoiceEnvelope = self.client.get(&format!("/invoices/{id}")).await?;
        Ok(envelope.invoice)
    }

    #[instrument(skip(self, invoice))]
    async fn create(&self, invoice: &Invoice) -> Result<Invoice, PortError> {
        let envelope: InvoiceEnvelope = self.client.post("/invoices", invoice).await?;
        Ok(envelope.invoice)
    }

    #[instrument(skip(self, invoice))]
    async fn update(&self, id: &InvoiceId, invoice: &Invoice) -> Result<Invoice, PortError> {
        let envelope: InvoiceEnvelope = self
            .client
            .put(&format!("/invoices/{id}"), invoice)
            .await?;
        Ok(envelope.invoice)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &InvoiceId) -> Result<(), PortError> {
        self.client.delete(&format!("/invoices/{id}")).await
    }
}

/// `/customers` adapter
pub struct RemoteCustomerAdapter {
    client: Arc<HttpClient>,
}

impl RemoteCustomerAdapter {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

impl DomainPort for RemoteCustomerAdapter {}

#[async_trait]
impl CustomerPort for RemoteCustomerAdapter {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Customer>, PortError> {
        let envelope: CustomerListEnvelope = self.client.get("/customers").await?;
        Ok(envelope.customers)
    }

    #[instrument(skip(self, profile))]
    async fn create(&self, profile: &CustomerProfile) -> Result<Customer, PortError> {
        let envelope: CustomerEnvelope = self.client.post("/customers", profile).await?;
        Ok(envelope.customer)
    }

    #[instrument(skip(self, profile))]
    async fn update(
        &self,
        id: &CustomerId,
        profile: &CustomerProfile,
    ) -> Result<Customer, PortError> {
        let envelope: CustomerEnvelope = self
            .client
            .put(&format!("/customers/{id}"), profile)
            .await?;
        Ok(envelope.customer)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &CustomerId) -> Result<(), PortError> {
        self.client.delete(&format!("/customers/{id}")).await
    }
}

/// `/settings` singleton adapter
///
/// The collaborator may answer with no stored settings; that reads as the
/// default configuration rather than an error.
pub struct RemoteSettingsAdapter {
    client: Arc<HttpClient>,
}

impl RemoteSettingsAdapter {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

impl DomainPort for RemoteSettingsAdapter {}

#[async_trait]
impl SettingsPort for RemoteSettingsAdapter {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<InvoiceConfig, PortError> {
        let envelope: SettingsEnvelope = self.client.get("/settings").await?;
        Ok(envelope.settings.unwrap_or_default())
    }

    #[instrument(skip(self, config))]
    async fn save(&self, config: &InvoiceConfig) -> Result<(), PortError> {
        self.client.put_ignored("/settings", config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_envelope_decodes_wire_names() {
        let json = r#"{
            "invoice": {
                "id": "9",
                "invoiceNo": "INV-9",
                "date": "2026-03-01",
                "placeOfSupply": "Gujarat",
                "businessName": "B",
                "businessAddress": "",
                "businessGST": "",
                "businessPAN": "",
                "businessMobile": "",
                "customerName": "C",
                "customerAddress": "",
                "customerGST": "",
                "customerPAN": "",
                "items": [],
                "subtotal": 0.0,
                "grandTotal": 0.0,
                "bankName": "",
                "bankBranch": "",
                "bankAccount": "",
                "bankIFSC": "",
                "notes": "",
                "status": "Draft"
            }
        }"#;
        let envelope: InvoiceEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.invoice.invoice_no, "INV-9");
    }

    #[test]
    fn test_missing_collections_decode_empty() {
        let invoices: InvoiceListEnvelope = serde_json::from_str("{}").unwrap();
        assert!(invoices.invoices.is_empty());
        let customers: CustomerListEnvelope = serde_json::from_str("{}").unwrap();
        assert!(customers.customers.is_empty());
    }

    #[test]
    fn test_absent_settings_falls_back_to_default() {
        let envelope: SettingsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.settings.is_none());
        assert_eq!(
            envelope.settings.unwrap_or_default(),
            InvoiceConfig::default()
        );
    }

    #[test]
    fn test_auth_envelope_shape() {
        let json = r#"{"user":{"id":"u-1","name":"Admin","email":"a@b.c"},"token":"tok"}"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.user.name, "Admin");
    }
}
