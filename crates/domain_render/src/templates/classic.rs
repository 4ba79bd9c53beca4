//! Classic layout: bordered table, boxed customer and invoice-meta panels,
//! uppercase column headers, signature line

use core_kernel::format_plain;
use domain_config::{FieldConfiguration, TemplateKind};
use domain_invoice::Invoice;

use crate::common::{
    bank_entries, boxed_panel, configured_table, format_date, push_if_present, words_phrase,
};
use crate::document::{Block, Document, Header, HeaderStyle, PanelEntry, TableStyle};

pub fn render(invoice: &Invoice, fields: &FieldConfiguration) -> Document {
    let mut document = Document::new(TemplateKind::Classic);

    let mut header_lines = vec![invoice.business_address.clone()];
    if !invoice.business_mobile.is_empty() {
        header_lines.push(format!("Mobile: {}", invoice.business_mobile));
    }
    document.push(Block::Header(Header {
        style: HeaderStyle::Ruled,
        title: "INVOICE".to_string(),
        business_name: invoice.business_name.clone(),
        lines: header_lines,
        corner: Vec::new(),
    }));

    let mut customer = vec![
        PanelEntry::bare(invoice.customer_name.clone()),
        PanelEntry::bare(invoice.customer_address.clone()),
    ];
    push_if_present(&mut customer, "GST NO", &invoice.customer_gst);
    push_if_present(&mut customer, "PAN NO", &invoice.customer_pan);

    let mut meta = vec![
        PanelEntry::labeled("Date", format_date(&invoice.date)),
        PanelEntry::labeled("Bill No", invoice.invoice_no.clone()),
        PanelEntry::labeled("POS", invoice.place_of_supply.clone()),
    ];
    push_if_present(&mut meta, "GST", &invoice.business_gst);
    push_if_present(&mut meta, "PAN", &invoice.business_pan);

    document.push(Block::PanelRow(vec![
        boxed_panel(Some("TO:"), customer),
        boxed_panel(None, meta),
    ]));

    let mut table = configured_table(
        invoice,
        fields,
        TableStyle {
            bordered: true,
            uppercase_headings: true,
            ..TableStyle::default()
        },
    );
    table.footer = Some(PanelEntry::labeled(
        "TOTAL",
        format_plain(invoice.grand_total),
    ));
    document.push(Block::ItemTable(table));

    document.push(Block::AmountInWords {
        label: "Amount in Words:".to_string(),
        text: words_phrase(invoice.grand_total),
    });
    document.push(Block::BankDetails(boxed_panel(
        Some("Bank Details:"),
        bank_entries(invoice),
    )));

    if !invoice.notes.is_empty() {
        document.push(Block::Notes {
            heading: None,
            text: invoice.notes.clone(),
        });
    }

    document.push(Block::Signature {
        left: Some("Customer Signature".to_string()),
        right: vec![
            format!("For {}", invoice.business_name),
            "Authorized Signature".to_string(),
        ],
    });

    document
}
