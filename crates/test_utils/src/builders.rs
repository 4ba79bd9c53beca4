//! Test data builders
//!
//! Builders let tests specify only the fields a scenario cares about and take
//! predictable defaults for everything else.

use core_kernel::{CustomerId, InvoiceId, ItemId};
use domain_config::InvoiceConfig;
use domain_invoice::{
    recompute_totals, Customer, CustomerProfile, Invoice, InvoiceItem, InvoiceStatus,
};

/// Builder for line items
pub struct ItemBuilder {
    item: InvoiceItem,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self {
            item: InvoiceItem::blank(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.item.id = ItemId::new(id);
        self
    }

    pub fn with_khata_name(mut self, name: impl Into<String>) -> Self {
        self.item.khata_name = name.into();
        self
    }

    pub fn with_price_type(mut self, price_type: impl Into<String>) -> Self {
        self.item.price_type = price_type.into();
        self
    }

    pub fn with_cut(mut self, cut: impl Into<String>) -> Self {
        self.item.cut = cut.into();
        self
    }

    pub fn with_nos(mut self, nos: impl Into<String>) -> Self {
        self.item.nos = nos.into();
        self
    }

    /// Sets weight and price and materializes the total, like the standard
    /// entry path would
    pub fn with_weight_and_price(mut self, weight: impl Into<String>, price: impl Into<String>) -> Self {
        self.item.weight = weight.into();
        self.item.price = price.into();
        self.item.total = self.item.weight.trim().parse::<f64>().unwrap_or(0.0)
            * self.item.price.trim().parse::<f64>().unwrap_or(0.0);
        self
    }

    /// Overrides the materialized total, for desynchronized-record scenarios
    pub fn with_total(mut self, total: f64) -> Self {
        self.item.total = total;
        self
    }

    pub fn build(self) -> InvoiceItem {
        self.item
    }
}

/// Builder for invoices
pub struct InvoiceBuilder {
    invoice: Invoice,
    keep_totals: bool,
}

impl Default for InvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceBuilder {
    /// Starts from a drafted invoice with the built-in configuration
    pub fn new() -> Self {
        let mut invoice = Invoice::draft(&InvoiceConfig::default(), 1);
        invoice.items.clear();
        invoice.customer_name = "Krishna Diamond".to_string();
        invoice.customer_address = "Varachha Road, Surat".to_string();
        Self {
            invoice,
            keep_totals: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.invoice.id = InvoiceId::new(id);
        self
    }

    pub fn with_invoice_no(mut self, number: impl Into<String>) -> Self {
        self.invoice.invoice_no = number.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.invoice.date = date.into();
        self
    }

    pub fn with_customer(mut self, name: impl Into<String>) -> Self {
        self.invoice.customer_name = name.into();
        self
    }

    pub fn with_customer_gst(mut self, gst: impl Into<String>) -> Self {
        self.invoice.customer_gst = gst.into();
        self
    }

    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.invoice.status = status;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.invoice.notes = notes.into();
        self
    }

    pub fn add_item(mut self, item: InvoiceItem) -> Self {
        self.invoice.items.push(item);
        self
    }

    /// Stores the given totals verbatim instead of re-deriving them,
    /// simulating a stale record loaded from storage
    pub fn with_stored_totals(mut self, subtotal: f64, grand_total: f64) -> Self {
        self.invoice.subtotal = subtotal;
        self.invoice.grand_total = grand_total;
        self.keep_totals = true;
        self
    }

    pub fn build(mut self) -> Invoice {
        if !self.keep_totals {
            let totals = recompute_totals(&self.invoice.items);
            self.invoice.subtotal = totals.subtotal;
            self.invoice.grand_total = totals.grand_total;
        }
        self.invoice
    }
}

/// Builder for customers
pub struct CustomerBuilder {
    customer: Customer,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    pub fn new() -> Self {
        Self {
            customer: Customer {
                id: CustomerId::new("c-1"),
                profile: CustomerProfile {
                    name: "SHREE MAHANT GEMS".to_string(),
                    address: "Katargam, Surat".to_string(),
                    gst: "24AEBFS9465G1ZS".to_string(),
                    pan: String::new(),
                    mobile: String::new(),
                    email: String::new(),
                },
            },
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.customer.id = CustomerId::new(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.customer.profile.name = name.into();
        self
    }

    pub fn build(self) -> Customer {
        self.customer
    }
}
