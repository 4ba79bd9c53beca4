//! Tests for domain_render - covering column configuration, the statutory
//! gst layout, and the per-template block structure

use domain_config::{FieldConfiguration, InvoiceField, TemplateKind};
use domain_render::{render, Align, Block, HeaderStyle};
use test_utils::{ConfigFixtures, InvoiceFixtures};

/// The five templates whose columns come from the field configuration
const CONFIGURABLE: [TemplateKind; 5] = [
    TemplateKind::Classic,
    TemplateKind::Modern,
    TemplateKind::Minimal,
    TemplateKind::Professional,
    TemplateKind::Elegant,
];

// ============= COLUMN CONFIGURATION TESTS =============
mod column_configuration_tests {
    use super::*;

    #[test]
    fn test_disabled_field_omits_column_and_cells() {
        let invoice = InvoiceFixtures::graded_parcel();
        let mut fields = FieldConfiguration::default();
        fields.set_enabled(InvoiceField::Nos, false);

        for kind in CONFIGURABLE {
            let document = render(kind, &invoice, &fields);
            let table = document.item_table().unwrap();
            assert!(
                table.column_for(InvoiceField::Nos).is_none(),
                "{kind} still renders a disabled column"
            );
            assert_eq!(table.columns.len(), 6);
            for row in &table.rows {
                assert_eq!(row.len(), 6);
            }
            // The piece counts for lines two and three appear nowhere else.
            assert!(!table
                .rows
                .iter()
                .flatten()
                .any(|cell| cell == "27" || cell == "362"));
        }
    }

    #[test]
    fn test_columns_follow_canonical_order() {
        let invoice = InvoiceFixtures::job_work();
        let fields = ConfigFixtures::narrow_fields();

        for kind in CONFIGURABLE {
            let document = render(kind, &invoice, &fields);
            let table = document.item_table().unwrap();
            let rendered: Vec<InvoiceField> =
                table.columns.iter().filter_map(|column| column.field).collect();
            assert_eq!(
                rendered,
                vec![
                    InvoiceField::KhataName,
                    InvoiceField::Weight,
                    InvoiceField::Price,
                    InvoiceField::Total,
                ],
                "{kind} reordered the columns"
            );
        }
    }

    #[test]
    fn test_custom_label_flows_into_heading() {
        let invoice = InvoiceFixtures::job_work();
        let mut fields = FieldConfiguration::default();
        fields.set_label(InvoiceField::KhataName, "Party");

        let document = render(TemplateKind::Elegant, &invoice, &fields);
        let table = document.item_table().unwrap();
        let column = table.column_for(InvoiceField::KhataName).unwrap();
        assert_eq!(column.heading, "Party");
    }

    #[test]
    fn test_uppercase_style_uppercases_headings() {
        let invoice = InvoiceFixtures::job_work();
        let fields = FieldConfiguration::default();

        let document = render(TemplateKind::Classic, &invoice, &fields);
        let table = document.item_table().unwrap();
        assert!(table.style.uppercase_headings);
        let column = table.column_for(InvoiceField::KhataName).unwrap();
        assert_eq!(column.heading, "KHATA NAME");

        // Elegant keeps mixed-case headings.
        let document = render(TemplateKind::Elegant, &invoice, &fields);
        let column = document
            .item_table()
            .unwrap()
            .column_for(InvoiceField::KhataName)
            .unwrap();
        assert_eq!(column.heading, "Khata Name");
    }

    #[test]
    fn test_cell_alignment_by_field() {
        let invoice = InvoiceFixtures::job_work();
        let fields = FieldConfiguration::default();

        let document = render(TemplateKind::Modern, &invoice, &fields);
        let table = document.item_table().unwrap();
        assert_eq!(
            table.column_for(InvoiceField::KhataName).unwrap().align,
            Align::Left
        );
        assert_eq!(
            table.column_for(InvoiceField::Total).unwrap().align,
            Align::Right
        );
        assert_eq!(
            table.column_for(InvoiceField::Nos).unwrap().align,
            Align::Center
        );
    }

    #[test]
    fn test_total_cell_renders_fixed_two_decimals() {
        let invoice = InvoiceFixtures::job_work();
        let fields = FieldConfiguration::default();

        let document = render(TemplateKind::Classic, &invoice, &fields);
        let table = document.item_table().unwrap();
        let total_index = table
            .columns
            .iter()
            .position(|column| column.field == Some(InvoiceField::Total))
            .unwrap();
        assert_eq!(table.rows[0][total_index], "42595.00");
    }

    #[test]
    fn test_stored_entry_text_is_not_reformatted() {
        let invoice = InvoiceFixtures::graded_parcel();
        let fields = FieldConfiguration::default();

        let document = render(TemplateKind::Minimal, &invoice, &fields);
        let table = document.item_table().unwrap();
        let weight_index = table
            .columns
            .iter()
            .position(|column| column.field == Some(InvoiceField::Weight))
            .unwrap();
        // "12" stays "12", never "12.00".
        assert_eq!(table.rows[0][weight_index], "12");
        assert_eq!(table.rows[1][weight_index], "23.55");
    }
}

// ============= GST LAYOUT TESTS =============
mod gst_layout_tests {
    use super::*;

    #[test]
    fn test_gst_ignores_field_configuration() {
        let invoice = InvoiceFixtures::graded_parcel();
        let mut fields = FieldConfiguration::default();
        fields.set_enabled(InvoiceField::Cut, false);
        fields.set_enabled(InvoiceField::Nos, false);

        let document = render(TemplateKind::Gst, &invoice, &fields);
        let table = document.item_table().unwrap();
        assert_eq!(table.columns.len(), 7);
        assert!(table.column_for(InvoiceField::Cut).is_some());
        assert!(table.column_for(InvoiceField::Nos).is_some());
    }

    #[test]
    fn test_gst_statutory_headings() {
        let invoice = InvoiceFixtures::job_work();
        let document = render(TemplateKind::Gst, &invoice, &FieldConfiguration::default());
        let table = document.item_table().unwrap();
        let headings: Vec<&str> = table
            .columns
            .iter()
            .map(|column| column.heading.as_str())
            .collect();
        assert_eq!(
            headings,
            vec!["S. No.", "Description of Goods", "Cut", "Qty", "Weight", "Rate", "Amount"]
        );
    }

    #[test]
    fn test_gst_serial_numbers_run_from_one() {
        let invoice = InvoiceFixtures::graded_parcel();
        let document = render(TemplateKind::Gst, &invoice, &FieldConfiguration::default());
        let table = document.item_table().unwrap();
        assert_eq!(table.columns[0].field, None);
        let serials: Vec<&str> = table.rows.iter().map(|row| row[0].as_str()).collect();
        assert_eq!(serials, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_gst_blank_registration_numbers_print_as_rules() {
        // An unregistered business leaves PAN and GSTIN as fill-in rules.
        let mut invoice = InvoiceFixtures::job_work();
        invoice.business_pan.clear();
        invoice.business_gst.clear();
        let document = render(TemplateKind::Gst, &invoice, &FieldConfiguration::default());

        let header = document
            .blocks
            .iter()
            .find_map(|block| match block {
                Block::Header(header) => Some(header),
                _ => None,
            })
            .unwrap();
        assert_eq!(header.style, HeaderStyle::Statutory);
        assert!(header
            .corner
            .iter()
            .any(|line| line == "PAN: ________________"));
        assert!(header
            .corner
            .iter()
            .any(|line| line == "GSTIN: ________________"));
    }

    #[test]
    fn test_gst_footer_totals_row() {
        let invoice = InvoiceFixtures::graded_parcel();
        let document = render(TemplateKind::Gst, &invoice, &FieldConfiguration::default());
        let footer = document.item_table().unwrap().footer.as_ref().unwrap();
        assert_eq!(footer.label.as_deref(), Some("Total"));
        assert_eq!(footer.value, "137069.00");
    }
}

// ============= TOTALS AND WORDS TESTS =============
mod totals_tests {
    use super::*;
    use test_utils::{InvoiceBuilder, ItemBuilder};

    #[test]
    fn test_amount_in_words_present_in_every_template() {
        let invoice = InvoiceFixtures::job_work();
        let fields = FieldConfiguration::default();

        for kind in TemplateKind::ALL {
            let document = render(kind, &invoice, &fields);
            assert_eq!(
                document.amount_in_words(),
                Some("Forty Two Thousand Five Hundred Ninety Five Rupees Only"),
                "{kind} missing or wrong amount in words"
            );
        }
    }

    #[test]
    fn test_rupee_totals_use_locale_grouping() {
        let invoice = InvoiceFixtures::graded_parcel();
        let fields = FieldConfiguration::default();

        let document = render(TemplateKind::Modern, &invoice, &fields);
        let totals = document.totals().unwrap();
        assert!(totals.shaded);
        assert_eq!(totals.emphasis.value, "\u{20b9}1,37,069.00");
        assert_eq!(totals.rows[0].value, "\u{20b9}1,37,069.00");
    }

    #[test]
    fn test_zero_item_invoice_renders() {
        let invoice = InvoiceFixtures::empty();
        let fields = FieldConfiguration::default();

        for kind in TemplateKind::ALL {
            let document = render(kind, &invoice, &fields);
            let table = document.item_table().unwrap();
            assert!(table.rows.is_empty());
            assert_eq!(
                document.amount_in_words(),
                Some("Zero Rupees Only"),
                "{kind} words wrong for an empty invoice"
            );
        }
    }

    #[test]
    fn test_stale_stored_total_is_printed_as_is() {
        // A record whose stored totals disagree with its items renders the
        // stored figures; reconciliation happens at mutation time.
        let invoice = InvoiceBuilder::new()
            .add_item(
                ItemBuilder::new()
                    .with_weight_and_price("10", "100")
                    .build(),
            )
            .with_stored_totals(999.0, 999.0)
            .build();

        let document = render(TemplateKind::Elegant, &invoice, &FieldConfiguration::default());
        let totals = document.totals().unwrap();
        assert_eq!(totals.emphasis.value, "\u{20b9}999.00");
        assert_eq!(
            document.amount_in_words(),
            Some("Nine Hundred Ninety Nine Rupees Only")
        );
    }
}

// ============= TEMPLATE STRUCTURE TESTS =============
mod structure_tests {
    use super::*;

    fn header_of(document: &domain_render::Document) -> &domain_render::Header {
        document
            .blocks
            .iter()
            .find_map(|block| match block {
                Block::Header(header) => Some(header),
                _ => None,
            })
            .expect("every template emits a header")
    }

    #[test]
    fn test_header_style_per_template() {
        let invoice = InvoiceFixtures::job_work();
        let fields = FieldConfiguration::default();
        let expected = [
            (TemplateKind::Classic, HeaderStyle::Ruled),
            (TemplateKind::Modern, HeaderStyle::Banner),
            (TemplateKind::Minimal, HeaderStyle::Airy),
            (TemplateKind::Professional, HeaderStyle::BlockLetter),
            (TemplateKind::Elegant, HeaderStyle::Light),
            (TemplateKind::Gst, HeaderStyle::Statutory),
        ];
        for (kind, style) in expected {
            let document = render(kind, &invoice, &fields);
            assert_eq!(header_of(&document).style, style, "{kind}");
            assert_eq!(document.template, kind);
        }
    }

    #[test]
    fn test_modern_corner_carries_hashed_invoice_number() {
        let invoice = InvoiceFixtures::job_work();
        let document = render(TemplateKind::Modern, &invoice, &FieldConfiguration::default());
        assert_eq!(header_of(&document).corner, vec!["#113/2026".to_string()]);
    }

    #[test]
    fn test_dates_render_day_first() {
        let invoice = InvoiceFixtures::job_work();
        let document = render(TemplateKind::Classic, &invoice, &FieldConfiguration::default());

        let meta_values: Vec<String> = document
            .blocks
            .iter()
            .filter_map(|block| match block {
                Block::PanelRow(panels) => Some(panels),
                _ => None,
            })
            .flatten()
            .flat_map(|panel| panel.entries.iter().map(|entry| entry.value.clone()))
            .collect();
        assert!(meta_values.contains(&"18/01/2026".to_string()));
    }

    #[test]
    fn test_classic_footer_and_signatures() {
        let invoice = InvoiceFixtures::job_work();
        let document = render(TemplateKind::Classic, &invoice, &FieldConfiguration::default());

        let footer = document.item_table().unwrap().footer.as_ref().unwrap();
        assert_eq!(footer.label.as_deref(), Some("TOTAL"));
        assert_eq!(footer.value, "42595.00");

        let signature = document
            .blocks
            .iter()
            .find_map(|block| match block {
                Block::Signature { left, right } => Some((left, right)),
                _ => None,
            })
            .unwrap();
        assert_eq!(signature.0.as_deref(), Some("Customer Signature"));
        assert!(signature.1.iter().any(|line| line.starts_with("For ")));
    }

    #[test]
    fn test_elegant_omits_bank_and_signature_blocks() {
        let invoice = InvoiceFixtures::job_work();
        let document = render(TemplateKind::Elegant, &invoice, &FieldConfiguration::default());
        assert!(!document
            .blocks
            .iter()
            .any(|block| matches!(block, Block::BankDetails(_) | Block::Signature { .. })));
    }

    #[test]
    fn test_notes_block_only_when_notes_present() {
        let fields = FieldConfiguration::default();
        let with_notes = InvoiceFixtures::job_work();
        let mut without_notes = InvoiceFixtures::empty();
        without_notes.notes.clear();

        for kind in TemplateKind::ALL {
            let document = render(kind, &without_notes, &fields);
            assert!(
                !document
                    .blocks
                    .iter()
                    .any(|block| matches!(block, Block::Notes { .. })),
                "{kind} rendered an empty notes block"
            );
        }
        let document = render(TemplateKind::Classic, &with_notes, &fields);
        assert!(document
            .blocks
            .iter()
            .any(|block| matches!(block, Block::Notes { .. })));
    }
}
