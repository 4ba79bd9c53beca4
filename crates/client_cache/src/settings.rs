//! The tenant settings cache
//!
//! Settings writes are optimistic: the local configuration is mutated first,
//! then persisted. A failed save raises the error flag but keeps the local
//! value, so the editing surface never snaps back under the user's hands.
//! Everything else in this crate is confirmed-write; the settings singleton
//! is the one exception.

use std::sync::Arc;

use tracing::{debug, warn};

use domain_config::{
    BankProfile, BusinessProfile, FieldConfiguration, InvoiceConfig, InvoiceDefaults,
    InvoiceField, TemplateKind,
};
use domain_invoice::ports::SettingsPort;

/// Local working copy of the per-tenant configuration singleton
pub struct SettingsCache {
    port: Arc<dyn SettingsPort>,
    config: InvoiceConfig,
    loading: bool,
    error: Option<String>,
}

impl SettingsCache {
    pub fn new(port: Arc<dyn SettingsPort>) -> Self {
        Self {
            port,
            config: InvoiceConfig::default(),
            loading: false,
            error: None,
        }
    }

    /// Loads the stored configuration; failure falls back to the default
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.port.load().await {
            Ok(config) => {
                debug!("settings refreshed");
                self.config = config;
            }
            Err(err) => {
                warn!(error = %err, "settings refresh failed, using defaults");
                self.error = Some("Failed to load settings".to_string());
                self.config = InvoiceConfig::default();
            }
        }
        self.loading = false;
    }

    async fn persist(&mut self) {
        if let Err(err) = self.port.save(&self.config).await {
            warn!(error = %err, "settings save failed, keeping local value");
            self.error = Some("Failed to save settings".to_string());
        }
    }

    /// Toggles a field column; disabling the mandatory amount column is a
    /// no-op and is not persisted
    pub async fn set_field_enabled(&mut self, field: InvoiceField, enabled: bool) {
        if field.is_mandatory() && !enabled {
            return;
        }
        self.config.fields.set_enabled(field, enabled);
        self.persist().await;
    }

    /// Renames a field column; an empty label restores the built-in one
    pub async fn set_field_label(&mut self, field: InvoiceField, label: &str) {
        self.config.fields.set_label(field, label);
        self.persist().await;
    }

    pub async fn set_default_template(&mut self, template: TemplateKind) {
        self.config.default_template = template;
        self.persist().await;
    }

    pub async fn update_business(&mut self, business: BusinessProfile) {
        self.config.business = business;
        self.persist().await;
    }

    pub async fn update_bank(&mut self, bank: BankProfile) {
        self.config.bank = bank;
        self.persist().await;
    }

    pub async fn update_invoice_defaults(&mut self, defaults: InvoiceDefaults) {
        self.config.invoice_defaults = defaults;
        self.persist().await;
    }

    /// Restores and persists the built-in configuration
    pub async fn reset_to_default(&mut self) {
        self.config = InvoiceConfig::default();
        self.persist().await;
    }

    pub fn config(&self) -> &InvoiceConfig {
        &self.config
    }

    pub fn fields(&self) -> &FieldConfiguration {
        &self.config.fields
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Drops the session's configuration, as on logout
    pub fn clear(&mut self) {
        self.config = InvoiceConfig::default();
        self.error = None;
    }
}
