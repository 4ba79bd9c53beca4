//! Integration Tests for the Invoice System
//!
//! These tests verify cross-crate workflows: drafting, editing, and
//! recomputing an invoice, rendering it through every template, and the
//! cache layer's interplay with the domain model.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use client_cache::{InvoiceCache, SettingsCache};
use core_kernel::{amount_in_words, format_currency, DomainPort, InvoiceId, PortError};
use domain_config::{InvoiceConfig, InvoiceField, TemplateKind};
use domain_invoice::ports::{InvoicePort, SettingsPort};
use domain_invoice::{apply_edit, Invoice};
use domain_render::render;

mod draft_to_render_workflow {
    use super::*;

    /// Drafts an invoice, fills one job-work line, and checks the totals
    /// and their rendering end to end
    #[test]
    fn test_draft_edit_and_render() {
        let config = InvoiceConfig::default();
        let mut invoice = Invoice::draft(&config, 1);
        assert_eq!(invoice.invoice_no, "INV-1");
        assert_eq!(invoice.items.len(), 1);

        invoice.items[0].khata_name = "Lab Grown Diamonds Job work".to_string();
        apply_edit(&mut invoice.items[0], InvoiceField::Nos, "185");
        apply_edit(&mut invoice.items[0], InvoiceField::Weight, "121.7");
        apply_edit(&mut invoice.items[0], InvoiceField::Price, "350");
        invoice.refresh_totals();

        assert_eq!(invoice.grand_total, 42595.0);
        assert_eq!(invoice.subtotal, invoice.grand_total);
        assert_eq!(format_currency(invoice.grand_total), "42,595.00");
        assert_eq!(
            amount_in_words(invoice.grand_total),
            "Forty Two Thousand Five Hundred Ninety Five"
        );

        for kind in TemplateKind::ALL {
            let document = render(kind, &invoice, &config.fields);
            let table = document.item_table().expect("item table");
            assert_eq!(table.rows.len(), 1);
            assert!(document
                .amount_in_words()
                .expect("words")
                .ends_with("Rupees Only"));
        }
    }

    /// Removing rows keeps at least one line and re-derives totals
    #[test]
    fn test_row_lifecycle() {
        let config = InvoiceConfig::default();
        let mut invoice = Invoice::draft(&config, 2);
        apply_edit(&mut invoice.items[0], InvoiceField::Weight, "10");
        apply_edit(&mut invoice.items[0], InvoiceField::Price, "100");
        invoice.push_blank_item();
        apply_edit(&mut invoice.items[1], InvoiceField::Weight, "5");
        apply_edit(&mut invoice.items[1], InvoiceField::Price, "20");
        invoice.refresh_totals();
        assert_eq!(invoice.grand_total, 1100.0);

        invoice.remove_item(1);
        assert_eq!(invoice.grand_total, 1000.0);

        // The last remaining row can never be removed.
        invoice.remove_item(0);
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.grand_total, 1000.0);
    }
}

mod cache_workflow {
    use super::*;

    struct StubInvoicePort {
        records: Mutex<Vec<Invoice>>,
    }

    impl DomainPort for StubInvoicePort {}

    #[async_trait]
    impl InvoicePort for StubInvoicePort {
        async fn list(&self) -> Result<Vec<Invoice>, PortError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn get(&self, id: &InvoiceId) -> Result<Invoice, PortError> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|record| record.id == *id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Invoice", id))
        }

        async fn create(&self, invoice: &Invoice) -> Result<Invoice, PortError> {
            let mut created = invoice.clone();
            created.id = InvoiceId::new("srv-1");
            self.records.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: &InvoiceId, invoice: &Invoice) -> Result<Invoice, PortError> {
            let mut saved = invoice.clone();
            saved.id = id.clone();
            let mut records = self.records.lock().unwrap();
            if let Some(slot) = records.iter_mut().find(|record| record.id == *id) {
                *slot = saved.clone();
            }
            Ok(saved)
        }

        async fn delete(&self, id: &InvoiceId) -> Result<(), PortError> {
            self.records.lock().unwrap().retain(|record| record.id != *id);
            Ok(())
        }
    }

    struct StubSettingsPort {
        stored: Mutex<InvoiceConfig>,
    }

    impl DomainPort for StubSettingsPort {}

    #[async_trait]
    impl SettingsPort for StubSettingsPort {
        async fn load(&self) -> Result<InvoiceConfig, PortError> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, config: &InvoiceConfig) -> Result<(), PortError> {
            *self.stored.lock().unwrap() = config.clone();
            Ok(())
        }
    }

    /// A drafted invoice travels through the cache, comes back with the
    /// server id, and renders under the tenant's configured template
    #[tokio::test]
    async fn test_draft_save_and_render_under_tenant_settings() {
        let settings_port = Arc::new(StubSettingsPort {
            stored: Mutex::new(InvoiceConfig::default()),
        });
        let mut settings = SettingsCache::new(Arc::clone(&settings_port) as Arc<dyn SettingsPort>);
        settings.refresh().await;
        settings.set_default_template(TemplateKind::Modern).await;
        settings.set_field_enabled(InvoiceField::PriceType, false).await;

        let invoice_port = Arc::new(StubInvoicePort {
            records: Mutex::new(Vec::new()),
        });
        let mut invoices = InvoiceCache::new(invoice_port);
        invoices.refresh().await;

        let mut draft = Invoice::draft(settings.config(), 1);
        apply_edit(&mut draft.items[0], InvoiceField::Weight, "121.7");
        apply_edit(&mut draft.items[0], InvoiceField::Price, "350");
        draft.refresh_totals();
        let saved = invoices.create(&draft).await.unwrap();
        assert_eq!(saved.id, InvoiceId::new("srv-1"));

        let stored = invoices.get(&saved.id).unwrap();
        let document = render(settings.config().default_template, stored, settings.fields());
        assert_eq!(document.template, TemplateKind::Modern);
        let table = document.item_table().unwrap();
        assert!(table.column_for(InvoiceField::PriceType).is_none());
        assert_eq!(table.rows[0].last().unwrap(), "42595.00");

        // The settings round-tripped through the port too.
        let persisted = settings_port.stored.lock().unwrap().clone();
        assert_eq!(persisted.default_template, TemplateKind::Modern);
        assert!(!persisted.fields.is_enabled(InvoiceField::PriceType));
    }
}
