//! Shared building blocks for the template renderers

use chrono::{Datelike, NaiveDate};

use core_kernel::{amount_in_words, format_currency, format_plain};
use domain_config::{FieldConfiguration, InvoiceField};
use domain_invoice::{Invoice, InvoiceItem};

use crate::document::{Align, Column, ItemTable, Panel, PanelEntry, TableStyle};

/// Blank-field placeholder used by the statutory gst layout
pub(crate) const PLACEHOLDER: &str = "________________";

/// Alignment by field: description left, amount right, everything else
/// centered
pub(crate) fn field_align(field: InvoiceField) -> Align {
    match field {
        InvoiceField::KhataName => Align::Left,
        InvoiceField::Total => Align::Right,
        _ => Align::Center,
    }
}

/// The display text for one cell
///
/// The mandatory `total` column renders with two fixed decimals; every other
/// field is the stored user text, never reformatted.
pub(crate) fn cell_text(item: &InvoiceItem, field: InvoiceField) -> String {
    match field {
        InvoiceField::KhataName => item.khata_name.clone(),
        InvoiceField::PriceType => item.price_type.clone(),
        InvoiceField::Cut => item.cut.clone(),
        InvoiceField::Nos => item.nos.clone(),
        InvoiceField::Weight => item.weight.clone(),
        InvoiceField::Price => item.price.clone(),
        InvoiceField::Total => format_plain(item.total),
    }
}

/// Builds the item table for the five configurable templates
///
/// Columns and headings come live from the enabled-and-ordered field list;
/// headings are uppercased when the style calls for it.
pub(crate) fn configured_table(
    invoice: &Invoice,
    fields: &FieldConfiguration,
    style: TableStyle,
) -> ItemTable {
    let columns: Vec<Column> = fields
        .enabled_fields()
        .into_iter()
        .map(|(field, descriptor)| Column {
            field: Some(field),
            heading: if style.uppercase_headings {
                descriptor.label.to_uppercase()
            } else {
                descriptor.label.clone()
            },
            align: field_align(field),
        })
        .collect();

    let rows = invoice
        .items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|column| match column.field {
                    Some(field) => cell_text(item, field),
                    None => String::new(),
                })
                .collect()
        })
        .collect();

    ItemTable {
        style,
        columns,
        rows,
        footer: None,
    }
}

/// The spelled-out grand total with its currency suffix
pub(crate) fn words_phrase(grand_total: f64) -> String {
    format!("{} Rupees Only", amount_in_words(grand_total))
}

/// Rupee-prefixed, locale-grouped currency string
pub(crate) fn rupees(amount: f64) -> String {
    format!("\u{20b9}{}", format_currency(amount))
}

/// Renders a stored ISO date as dd/mm/yyyy; unparseable text passes through
pub(crate) fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|parsed| parsed.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Long-form day month year ("18 January 2026")
pub(crate) fn format_date_long(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|parsed| format!("{} {} {}", parsed.day(), parsed.format("%B"), parsed.year()))
        .unwrap_or_else(|_| date.to_string())
}

/// Appends a labeled entry only when the value is non-empty
pub(crate) fn push_if_present(entries: &mut Vec<PanelEntry>, label: &str, value: &str) {
    if !value.is_empty() {
        entries.push(PanelEntry::labeled(label, value));
    }
}

/// The bank-details entries shared by several templates
pub(crate) fn bank_entries(invoice: &Invoice) -> Vec<PanelEntry> {
    vec![
        PanelEntry::labeled("Bank", invoice.bank_name.clone()),
        PanelEntry::labeled("Branch", invoice.bank_branch.clone()),
        PanelEntry::labeled("Account No", invoice.bank_account.clone()),
        PanelEntry::labeled("IFSC", invoice.bank_ifsc.clone()),
    ]
}

/// A boxed panel helper
pub(crate) fn boxed_panel(heading: Option<&str>, entries: Vec<PanelEntry>) -> Panel {
    Panel {
        heading: heading.map(str::to_string),
        boxed: true,
        entries,
    }
}

/// An open (unboxed) panel helper
pub(crate) fn open_panel(heading: Option<&str>, entries: Vec<PanelEntry>) -> Panel {
    Panel {
        heading: heading.map(str::to_string),
        boxed: false,
        entries,
    }
}
