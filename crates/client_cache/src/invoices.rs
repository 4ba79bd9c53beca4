//! The invoice collection cache

use std::sync::Arc;

use tracing::{debug, warn};

use core_kernel::InvoiceId;
use domain_invoice::ports::InvoicePort;
use domain_invoice::Invoice;

use crate::error::CacheError;
use crate::samples;

/// Local working copy of the tenant's invoices
///
/// `refresh` replaces the whole list. When the collaborator cannot be
/// reached the list falls back to the built-in samples and the error flag
/// raises; mutations never touch the fallback path.
pub struct InvoiceCache {
    port: Arc<dyn InvoicePort>,
    records: Vec<Invoice>,
    loading: bool,
    error: Option<String>,
}

impl InvoiceCache {
    pub fn new(port: Arc<dyn InvoicePort>) -> Self {
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
            Ok(invoices) => {
                debug!(count = invoices.len(), "invoice list refreshed");
                self.records = invoices;
            }
            Err(err) => {
                warn!(error = %err, "invoice refresh failed, showing sample data");
                self.error = Some("Failed to load invoices".to_string());
                self.records = samples::sample_invoices().to_vec();
            }
        }
        self.loading = false;
    }

    /// Saves a drafted invoice and appends the confirmed record
    pub async fn create(&mut self, invoice: &Invoice) -> Result<Invoice, CacheError> {
        let created = self.port.create(invoice).await?;
        self.records.push(created.clone());
        Ok(created)
    }

    /// Replaces a stored invoice with the confirmed record
    pub async fn update(
        &mut self,
        id: &InvoiceId,
        invoice: &Invoice,
    ) -> Result<Invoice, CacheError> {
        let saved = self.port.update(id, invoice).await?;
        if let Some(slot) = self.records.iter_mut().find(|record| record.id == *id) {
            *slot = saved.clone();
        }
        Ok(saved)
    }

    /// Removes an invoice, locally only after the collaborator confirms
    pub async fn delete(&mut self, id: &InvoiceId) -> Result<(), CacheError> {
        self.port.delete(id).await?;
        self.records.retain(|record| record.id != *id);
        Ok(())
    }

    pub fn get(&self, id: &InvoiceId) -> Option<&Invoice> {
        self.records.iter().find(|record| record.id == *id)
    }

    pub fn records(&self) -> &[Invoice] {
        &self.records
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Drops every cached record, as on logout
    pub fn clear(&mut self) {
        self.records.clear();
        self.error = None;
    }
}
