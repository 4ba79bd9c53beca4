//! Pre-built test fixtures

use domain_config::{FieldConfiguration, InvoiceConfig, InvoiceField};
use domain_invoice::{Invoice, InvoiceStatus};

use crate::builders::{InvoiceBuilder, ItemBuilder};

/// Fixture invoices mirroring realistic trade records
pub struct InvoiceFixtures;

impl InvoiceFixtures {
    /// The single-line job-work invoice (185 nos, 121.7 x 350)
    pub fn job_work() -> Invoice {
        InvoiceBuilder::new()
            .with_id("1")
            .with_invoice_no("113/2026")
            .with_date("2026-01-18")
            .with_customer("Krishna Diamond")
            .with_status(InvoiceStatus::Paid)
            .add_item(
                ItemBuilder::new()
                    .with_id("1")
                    .with_khata_name("Lab Grown Diamonds Job work")
                    .with_nos("185")
                    .with_weight_and_price("121.7", "350")
                    .build(),
            )
            .build()
    }

    /// A three-line invoice with distinct cut grades
    pub fn graded_parcel() -> Invoice {
        InvoiceBuilder::new()
            .with_id("3")
            .with_invoice_no("107/26")
            .with_date("2026-02-02")
            .with_customer("SHREE MAHANT GEMS")
            .with_customer_gst("24AEBFS9465G1ZS")
            .with_status(InvoiceStatus::Pending)
            .add_item(
                ItemBuilder::new()
                    .with_id("1")
                    .with_cut("0.17-0.249")
                    .with_nos("12")
                    .with_weight_and_price("12", "190")
                    .build(),
            )
            .add_item(
                ItemBuilder::new()
                    .with_id("2")
                    .with_cut("0.76-1.259")
                    .with_nos("27")
                    .with_weight_and_price("23.55", "700")
                    .build(),
            )
            .add_item(
                ItemBuilder::new()
                    .with_id("3")
                    .with_cut("0.25-0.759")
                    .with_nos("362")
                    .with_weight_and_price("147.88", "800")
                    .build(),
            )
            .build()
    }

    /// An invoice with no items, as a freshly wiped draft would be
    pub fn empty() -> Invoice {
        InvoiceBuilder::new().with_id("9").build()
    }
}

/// Fixture field configurations
pub struct ConfigFixtures;

impl ConfigFixtures {
    /// Everything enabled with the built-in labels
    pub fn all_fields() -> FieldConfiguration {
        FieldConfiguration::default()
    }

    /// A trimmed-down column set keeping only description and amounts
    pub fn narrow_fields() -> FieldConfiguration {
        let mut fields = FieldConfiguration::default();
        fields.set_enabled(InvoiceField::PriceType, false);
        fields.set_enabled(InvoiceField::Cut, false);
        fields.set_enabled(InvoiceField::Nos, false);
        fields
    }

    /// The built-in tenant configuration
    pub fn tenant_config() -> InvoiceConfig {
        InvoiceConfig::default()
    }
}
