//! Invoice and line-item records

use chrono::Local;
use serde::{Deserialize, Serialize};

use core_kernel::{InvoiceId, ItemId};
use domain_config::InvoiceConfig;

use crate::compute::recompute_totals;

/// Invoice lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Pending,
    Paid,
}

/// One line on an invoice
///
/// The descriptive fields and the numeric-looking `nos`, `weight` and
/// `price` are stored as the text the user entered, preserving their
/// formatting and units. `total` is materialized by the computation engine,
/// not re-derived at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: ItemId,
    pub khata_name: String,
    pub price_type: String,
    pub cut: String,
    pub nos: String,
    pub weight: String,
    pub price: String,
    pub total: f64,
}

impl InvoiceItem {
    /// Creates an empty line with a fresh placeholder id
    pub fn blank() -> Self {
        Self {
            id: ItemId::placeholder(),
            khata_name: String::new(),
            price_type: String::new(),
            cut: String::new(),
            nos: String::new(),
            weight: String::new(),
            price: String::new(),
            total: 0.0,
        }
    }
}

/// A complete invoice record
///
/// Business and customer details are copied onto the invoice when it is
/// drafted and do not track later profile edits, the way a paper invoice
/// would. `subtotal` and `grand_total` are kept as separate, always-equal
/// fields because templates reference both names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_no: String,
    pub date: String,
    pub place_of_supply: String,
    pub business_name: String,
    pub business_address: String,
    #[serde(rename = "businessGST")]
    pub business_gst: String,
    #[serde(rename = "businessPAN")]
    pub business_pan: String,
    pub business_mobile: String,
    pub customer_name: String,
    pub customer_address: String,
    #[serde(rename = "customerGST")]
    pub customer_gst: String,
    #[serde(rename = "customerPAN")]
    pub customer_pan: String,
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    pub grand_total: f64,
    pub bank_name: String,
    pub bank_branch: String,
    pub bank_account: String,
    #[serde(rename = "bankIFSC")]
    pub bank_ifsc: String,
    pub notes: String,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Drafts a new in-memory invoice from the tenant configuration
    ///
    /// The id is a client-side placeholder until the remote collaborator
    /// assigns the real one on first save. `sequence` numbers the invoice
    /// within the tenant's running count.
    pub fn draft(config: &InvoiceConfig, sequence: usize) -> Self {
        Self {
            id: InvoiceId::placeholder(),
            invoice_no: format!("{}{}", config.invoice_defaults.invoice_prefix, sequence),
            date: Local::now().date_naive().to_string(),
            place_of_supply: config.invoice_defaults.default_place_of_supply.clone(),
            business_name: config.business.name.clone(),
            business_address: config.business.address.clone(),
            business_gst: config.business.gst.clone(),
            business_pan: config.business.pan.clone(),
            business_mobile: config.business.mobile.clone(),
            customer_name: String::new(),
            customer_address: String::new(),
            customer_gst: String::new(),
            customer_pan: String::new(),
            items: vec![InvoiceItem::blank()],
            subtotal: 0.0,
            grand_total: 0.0,
            bank_name: config.bank.bank_name.clone(),
            bank_branch: config.bank.branch.clone(),
            bank_account: config.bank.account_number.clone(),
            bank_ifsc: config.bank.ifsc.clone(),
            notes: config.invoice_defaults.default_notes.clone(),
            status: InvoiceStatus::Draft,
        }
    }

    /// Appends a fresh blank line
    pub fn push_blank_item(&mut self) {
        self.items.push(InvoiceItem::blank());
    }

    /// Removes a line by index
    ///
    /// An invoice always keeps at least one line: removing the last remaining
    /// row, like an out-of-range index, is a silent no-op rather than an
    /// error.
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
            self.refresh_totals();
        }
    }

    /// Re-derives `subtotal` and `grand_total` from the item totals
    pub fn refresh_totals(&mut self) {
        let totals = recompute_totals(&self.items);
        self.subtotal = totals.subtotal;
        self.grand_total = totals.grand_total;
    }
}
