//! Modern layout: colored banner header, filled table header row,
//! alternating row shading, totals in a shaded panel

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
    let mut document = Document::new(TemplateKind::Modern);

    let mut header_lines = vec![invoice.business_address.clone()];
    if !invoice.business_mobile.is_empty() {
        header_lines.push(format!("Tel: {}", invoice.business_mobile));
    }
    document.push(Block::Header(Header {
        style: HeaderStyle::Banner,
        title: "INVOICE".to_string(),
        business_name: invoice.business_name.clone(),
        lines: header_lines,
        corner: vec![format!("#{}", invoice.invoice_no)],
    }));

    let mut bill_to = vec![
        PanelEntry::bare(invoice.customer_name.clone()),
        PanelEntry::bare(invoice.customer_address.clone()),
    ];
    push_if_present(&mut bill_to, "GST", &invoice.customer_gst);
    push_if_present(&mut bill_to, "PAN", &invoice.customer_pan);

    let mut details = vec![
        PanelEntry::labeled("Date", format_date(&invoice.date)),
        PanelEntry::labeled("Invoice No", invoice.invoice_no.clone()),
        PanelEntry::labeled("Place of Supply", invoice.place_of_supply.clone()),
    ];
    push_if_present(&mut details, "GST", &invoice.business_gst);
    push_if_present(&mut details, "PAN", &invoice.business_pan);

    document.push(Block::PanelRow(vec![
        open_panel(Some("BILL TO"), bill_to),
        open_panel(Some("INVOICE DETAILS"), details),
    ]));

    document.push(Block::ItemTable(configured_table(
        invoice,
        fields,
        TableStyle {
            header_filled: true,
            zebra: true,
            uppercase_headings: true,
            ..TableStyle::default()
        },
    )));

    document.push(Block::Totals(TotalsPanel {
        shaded: true,
        rows: vec![PanelEntry::labeled("Subtotal", rupees(invoice.subtotal))],
        emphasis: PanelEntry::labeled("TOTAL", rupees(invoice.grand_total)),
    }));
    document.push(Block::AmountInWords {
        label: "Amount in Words:".to_string(),
        text: words_phrase(invoice.grand_total),
    });

    document.push(Block::BankDetails(open_panel(
        Some("BANK DETAILS"),
        bank_entries(invoice),
    )));

    if !invoice.notes.is_empty() {
        document.push(Block::Notes {
            heading: Some("NOTES".to_string()),
            text: invoice.notes.clone(),
        });
    }

    document.push(Block::Signature {
        left: Some("Thank you for your business!".to_string()),
        right: vec![
            format!("For {}", invoice.business_name),
            "Authorized Signature".to_string(),
        ],
    });

    document
}
