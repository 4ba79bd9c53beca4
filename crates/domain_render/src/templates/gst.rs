//! GST layout: the statutory tax-invoice form factor
//!
//! The seven-column table (serial, description, cut, quantity, weight, rate,
//! amount) matches the paper form this template replaces, so the column set
//! is hard-coded and the field configuration is ignored. Blank registration
//! numbers print as fill-in rules rather than disappearing.

use core_kernel::format_plain;
use domain_config::{InvoiceField, TemplateKind};
use domain_invoice::Invoice;

use crate::common::{
    bank_entries, boxed_panel, cell_text, field_align, format_date, words_phrase, PLACEHOLDER,
};
use crate::document::{
    Align, Block, Column, Document, Header, HeaderStyle, ItemTable, PanelEntry, TableStyle,
};

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

/// The statutory column set
fn statutory_columns() -> Vec<Column> {
    let field_column = |field: InvoiceField, heading: &str| Column {
        field: Some(field),
        heading: heading.to_string(),
        align: field_align(field),
    };
    vec![
        Column {
            field: None,
            heading: "S. No.".to_string(),
            align: Align::Center,
        },
        Column {
            field: Some(InvoiceField::KhataName),
            heading: "Description of Goods".to_string(),
            align: Align::Left,
        },
        field_column(InvoiceField::Cut, "Cut"),
        field_column(InvoiceField::Nos, "Qty"),
        field_column(InvoiceField::Weight, "Weight"),
        field_column(InvoiceField::Price, "Rate"),
        field_column(InvoiceField::Total, "Amount"),
    ]
}

pub fn render(invoice: &Invoice) -> Document {
    let mut document = Document::new(TemplateKind::Gst);

    document.push(Block::Header(Header {
        style: HeaderStyle::Statutory,
        title: "TAX INVOICE".to_string(),
        business_name: invoice.business_name.clone(),
        lines: vec![invoice.business_address.clone()],
        corner: vec![
            format!("PAN: {}", or_placeholder(&invoice.business_pan)),
            format!("GSTIN: {}", or_placeholder(&invoice.business_gst)),
        ],
    }));

    document.push(Block::PanelRow(vec![
        boxed_panel(
            Some("Details of Receiver (Billed to)"),
            vec![
                PanelEntry::labeled("Name", invoice.customer_name.clone()),
                PanelEntry::labeled("Address", or_placeholder(&invoice.customer_address)),
                PanelEntry::labeled("GSTIN", or_placeholder(&invoice.customer_gst)),
                PanelEntry::labeled("PAN/AADHAR No", or_placeholder(&invoice.customer_pan)),
            ],
        ),
        boxed_panel(
            Some("Invoice Details"),
            vec![
                PanelEntry::labeled("Invoice No", invoice.invoice_no.clone()),
                PanelEntry::labeled("Invoice Date", format_date(&invoice.date)),
                PanelEntry::labeled("Place of Supply", invoice.place_of_supply.clone()),
            ],
        ),
    ]));

    let columns = statutory_columns();
    let rows = invoice
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            columns
                .iter()
                .map(|column| match column.field {
                    Some(field) => cell_text(item, field),
                    None => (index + 1).to_string(),
                })
                .collect()
        })
        .collect();
    document.push(Block::ItemTable(ItemTable {
        style: TableStyle {
            bordered: true,
            ..TableStyle::default()
        },
        columns,
        rows,
        footer: Some(PanelEntry::labeled(
            "Total",
            format_plain(invoice.grand_total),
        )),
    }));

    document.push(Block::AmountInWords {
        label: "Invoice Value (In Words):".to_string(),
        text: words_phrase(invoice.grand_total),
    });

    document.push(Block::BankDetails(boxed_panel(None, bank_entries(invoice))));
    document.push(Block::Signature {
        left: None,
        right: vec![
            format!("For {}", invoice.business_name),
            "Authorised Signatory".to_string(),
        ],
    });

    if !invoice.notes.is_empty() {
        document.push(Block::Notes {
            heading: None,
            text: invoice.notes.clone(),
        });
    }

    document
}
