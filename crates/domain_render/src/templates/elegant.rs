//! Elegant layout: light rules only, compact two-column metadata, large
//! grand-total emphasis, no item-level border grid

use domain_config::{FieldConfiguration, TemplateKind};
use domain_invoice::Invoice;

use crate::common::{configured_table, open_panel, rupees, words_phrase};
use crate::document::{
    Block, Document, Header, HeaderStyle, PanelEntry, TableStyle, TotalsPanel,
};

pub fn render(invoice: &Invoice, fields: &FieldConfiguration) -> Document {
    let mut document = Document::new(TemplateKind::Elegant);

    document.push(Block::Header(Header {
        style: HeaderStyle::Light,
        title: "INVOICE".to_string(),
        business_name: invoice.business_name.clone(),
        lines: vec![invoice.business_address.clone()],
        // The compact head shows number and date as-stored.
        corner: vec![invoice.invoice_no.clone(), invoice.date.clone()],
    }));

    document.push(Block::PanelRow(vec![
        open_panel(
            Some("BILL TO"),
            vec![
                PanelEntry::bare(invoice.customer_name.clone()),
                PanelEntry::bare(invoice.customer_address.clone()),
            ],
        ),
        open_panel(
            Some("PLACE OF SUPPLY"),
            vec![PanelEntry::bare(invoice.place_of_supply.clone())],
        ),
    ]));

    document.push(Block::ItemTable(configured_table(
        invoice,
        fields,
        TableStyle::default(),
    )));

    document.push(Block::AmountInWords {
        label: "AMOUNT IN WORDS".to_string(),
        text: words_phrase(invoice.grand_total),
    });
    document.push(Block::Totals(TotalsPanel {
        shaded: false,
        rows: Vec::new(),
        emphasis: PanelEntry::labeled("GRAND TOTAL", rupees(invoice.grand_total)),
    }));

    document
}
