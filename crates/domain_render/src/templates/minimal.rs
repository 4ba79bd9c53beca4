//! Minimal layout: no cell borders, wide letter-spaced labels,
//! right-aligned totals panel with a bank-details strip

use domain_config::{FieldConfiguration, TemplateKind};
use domain_invoice::Invoice;

use crate::common::{
    bank_entries, configured_table, format_date, open_panel, push_if_present, rupees,
    words_phrase,
};
use crate::document::{
    Block, Document, Header, HeaderStyle, PanelEntry, TableStyle, TotalsPanel,
};

pub fn render(invoice: &Invoice, fields: &FieldConfiguration) -> Document {
    let mut document = Document::new(TemplateKind::Minimal);

    let mut header_lines = vec![invoice.business_address.clone()];
    if !invoice.business_mobile.is_empty() {
        header_lines.push(invoice.business_mobile.clone());
    }
    document.push(Block::Header(Header {
        style: HeaderStyle::Airy,
        title: "INVOICE".to_string(),
        business_name: invoice.business_name.clone(),
        lines: header_lines,
        corner: Vec::new(),
    }));

    let bill_to = vec![
        PanelEntry::bare(invoice.customer_name.clone()),
        PanelEntry::bare(invoice.customer_address.clone()),
    ];
    let details = vec![
        PanelEntry::labeled("Number", invoice.invoice_no.clone()),
        PanelEntry::labeled("Date", format_date(&invoice.date)),
        PanelEntry::labeled("Place", invoice.place_of_supply.clone()),
    ];
    let mut tax_info = Vec::new();
    push_if_present(&mut tax_info, "GST", &invoice.customer_gst);
    push_if_present(&mut tax_info, "PAN", &invoice.customer_pan);

    document.push(Block::PanelRow(vec![
        open_panel(Some("Bill To"), bill_to),
        open_panel(Some("Invoice Details"), details),
        open_panel(Some("Tax Information"), tax_info),
    ]));

    document.push(Block::ItemTable(configured_table(
        invoice,
        fields,
        TableStyle {
            uppercase_headings: true,
            letter_spaced: true,
            ..TableStyle::default()
        },
    )));

    document.push(Block::Totals(TotalsPanel {
        shaded: false,
        rows: vec![PanelEntry::labeled("Subtotal", rupees(invoice.subtotal))],
        emphasis: PanelEntry::labeled("Total", rupees(invoice.grand_total)),
    }));
    document.push(Block::AmountInWords {
        label: String::new(),
        text: words_phrase(invoice.grand_total),
    });

    document.push(Block::BankDetails(open_panel(
        Some("Payment Details"),
        bank_entries(invoice),
    )));

    if !invoice.notes.is_empty() {
        document.push(Block::Notes {
            heading: Some("Terms & Conditions".to_string()),
            text: invoice.notes.clone(),
        });
    }

    document.push(Block::Signature {
        left: None,
        right: vec!["Authorized Signature".to_string()],
    });

    document
}
