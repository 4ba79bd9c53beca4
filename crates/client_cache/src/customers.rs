//! The customer collection cache

use std::sync::Arc;

use tracing::{debug, warn};

use core_kernel::CustomerId;
use domain_invoice::ports::CustomerPort;
use domain_invoice::{Customer, CustomerProfile};

use crate::error::CacheError;

/// Local working copy of the tenant's customers
///
/// Unlike invoices there is no sample fallback; a failed refresh leaves an
/// empty list behind the error flag.
pub struct CustomerCache {
    port: Arc<dyn CustomerPort>,
    records: Vec<Customer>,
    loading: bool,
    error: Option<String>,
}

impl CustomerCache {
    pub fn new(port: Arc<dyn CustomerPort>) -> Self {
        Self {
            port,
            records: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Replaces the cached list with the collaborator's current records
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.port.list().await {
            Ok(customers) => {
                debug!(count = customers.len(), "customer list refreshed");
                self.records = customers;
            }
            Err(err) => {
                warn!(error = %err, "customer refresh failed");
                self.error = Some("Failed to load customers".to_string());
                self.records = Vec::new();
            }
        }
        self.loading = false;
    }

    /// Saves a new customer and appends the confirmed record
    pub async fn create(&mut self, profile: &CustomerProfile) -> Result<Customer, CacheError> {
        let created = self.port.create(profile).await?;
        self.records.push(created.clone());
        Ok(created)
    }

    /// Replaces a stored customer with the confirmed record
    pub async fn update(
        &mut self,
        id: &CustomerId,
        profile: &CustomerProfile,
    ) -> Result<Customer, CacheError> {
        let saved = self.port.update(id, profile).await?;
        if let Some(slot) = self.records.iter_mut().find(|record| record.id == *id) {
            *slot = saved.clone();
        }
        Ok(saved)
    }

    /// Removes a customer, locally only after the collaborator confirms
    pub async fn delete(&mut self, id: &CustomerId) -> Result<(), CacheError> {
        self.port.delete(id).await?;
        self.records.retain(|record| record.id != *id);
        Ok(())
    }

    pub fn records(&self) -> &[Customer] {
        &self.records
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.error = None;
    }
}
