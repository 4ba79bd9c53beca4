//! Invoice computation engine
//!
//! Totals are kept consistent at mutation time, never at render time: a
//! renderer handed a stale `grand_total` prints it as-is.

use domain_config::InvoiceField;

use crate::invoice::InvoiceItem;

/// The two derived invoice-level numbers
///
/// There is no tax or discount layer, so the fields are equal by
/// construction; they stay separate because templates label them
/// differently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub grand_total: f64,
}

/// Parses a user-entered numeric string, coercing failures to zero
fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Re-materializes an item's `total` after an edit
///
/// Only `weight` and `price` edits trigger recomputation; edits to the
/// descriptive fields leave `total` untouched. No rounding is applied here -
/// rounding happens at format time.
pub fn recompute_item(item: &mut InvoiceItem, changed: InvoiceField) {
    if matches!(changed, InvoiceField::Weight | InvoiceField::Price) {
        item.total = parse_amount(&item.weight) * parse_amount(&item.price);
    }
}

/// Applies a text edit to an item, recomputing the total when relevant
///
/// `Total` is materialized, not typed, so an edit addressed to it is
/// ignored.
pub fn apply_edit(item: &mut InvoiceItem, field: InvoiceField, value: impl Into<String>) {
    let value = value.into();
    match field {
        InvoiceField::KhataName => item.khata_name = value,
        InvoiceField::PriceType => item.price_type = value,
        InvoiceField::Cut => item.cut = value,
        InvoiceField::Nos => item.nos = value,
        InvoiceField::Weight => item.weight = value,
        InvoiceField::Price => item.price = value,
        InvoiceField::Total => return,
    }
    recompute_item(item, field);
}

/// Folds item totals into the invoice-level totals
pub fn recompute_totals(items: &[InvoiceItem]) -> Totals {
    let subtotal = items.iter().map(|item| item.total).sum();
    Totals {
        subtotal,
        grand_total: subtotal,
    }
}
