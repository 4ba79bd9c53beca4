//! Professional layout: heavy outer border, dark block-letter section
//! labels, two-column payment/total summary

use domain_config::{FieldConfiguration, TemplateKind};
use domain_invoice::Invoice;

use crate::common::{
    bank_entries, boxed_panel, configured_table, format_date, format_date_long,
    push_if_present, rupees, words_phrase,
};
use crate::document::{
    Block, Document, Header, HeaderStyle, PanelEntry, TableStyle, TotalsPanel,
};

pub fn render(invoice: &Invoice, fields: &FieldConfiguration) -> Document {
    let mut document = Document::new(TemplateKind::Professional);

    let mut header_lines = vec![invoice.business_address.clone()];
    if !invoice.business_mobile.is_empty() {
        header_lines.push(format!("Phone: {}", invoice.business_mobile));
    }
    if !invoice.business_gst.is_empty() {
        header_lines.push(format!("GST: {}", invoice.business_gst));
    }
    if !invoice.business_pan.is_empty() {
        header_lines.push(format!("PAN: {}", invoice.business_pan));
    }
    document.push(Block::Header(Header {
        style: HeaderStyle::BlockLetter,
        title: "TAX INVOICE".to_string(),
        business_name: invoice.business_name.clone(),
        lines: header_lines,
        corner: vec![
            format!("#{}", invoice.invoice_no),
            format_date_long(&invoice.date),
        ],
    }));

    let mut bill_to = vec![
        PanelEntry::bare(invoice.customer_name.clone()),
        PanelEntry::bare(invoice.customer_address.clone()),
    ];
    push_if_present(&mut bill_to, "GST No", &invoice.customer_gst);
    push_if_present(&mut bill_to, "PAN No", &invoice.customer_pan);

    let details = vec![
        PanelEntry::labeled("Invoice Number", invoice.invoice_no.clone()),
        PanelEntry::labeled("Invoice Date", format_date(&invoice.date)),
        PanelEntry::labeled("Place of Supply", invoice.place_of_supply.clone()),
    ];

    document.push(Block::PanelRow(vec![
        boxed_panel(Some("Bill To"), bill_to),
        boxed_panel(Some("Invoice Information"), details),
    ]));

    document.push(Block::ItemTable(configured_table(
        invoice,
        fields,
        TableStyle {
            bordered: true,
            header_filled: true,
            zebra: true,
            uppercase_headings: true,
            ..TableStyle::default()
        },
    )));

    document.push(Block::BankDetails(boxed_panel(
        Some("Payment Details"),
        bank_entries(invoice),
    )));
    document.push(Block::Totals(TotalsPanel {
        shaded: false,
        rows: vec![PanelEntry::labeled("Subtotal", rupees(invoice.subtotal))],
        emphasis: PanelEntry::labeled("TOTAL AMOUNT", rupees(invoice.grand_total)),
    }));
    document.push(Block::AmountInWords {
        label: "Amount in Words".to_string(),
        text: words_phrase(invoice.grand_total),
    });

    if !invoice.notes.is_empty() {
        document.push(Block::Notes {
            heading: Some("Terms & Conditions".to_string()),
            text: invoice.notes.clone(),
        });
    }

    document.push(Block::Signature {
        left: Some("Thank you for your business!".to_string()),
        right: vec![
            invoice.business_name.clone(),
            "Authorized Signatory".to_string(),
        ],
    });

    document
}
