//! The structured document tree
//!
//! A renderer produces a [`Document`]: a flat sequence of layout blocks with
//! styling carried as data, not markup. A presentation layer may lower the
//! tree into a typeset page, HTML, or PDF draw calls; nothing here assumes a
//! target format.

use serde::{Deserialize, Serialize};

use domain_config::{InvoiceField, TemplateKind};

/// Horizontal cell/text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// How the header block is dressed, one style per template family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderStyle {
    /// Centered name over a heavy rule (classic)
    Ruled,
    /// Colored banner with right-aligned document title (modern)
    Banner,
    /// Large light type, generous whitespace (minimal)
    Airy,
    /// Dark block-letter name plate inside a heavy border (professional)
    BlockLetter,
    /// Small tracked label over the name, light rules only (elegant)
    Light,
    /// Statutory tax-invoice head with registration numbers in the corner (gst)
    Statutory,
}

/// The document header: business identity plus the document title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub style: HeaderStyle,
    pub title: String,
    pub business_name: String,
    /// Address and contact lines under the name
    pub lines: Vec<String>,
    /// Short lines pinned to the header's far corner (invoice number,
    /// registration numbers)
    pub corner: Vec<String>,
}

/// One labeled line inside a panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelEntry {
    pub label: Option<String>,
    pub value: String,
}

impl PanelEntry {
    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
        }
    }

    pub fn bare(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }
}

/// A titled group of entries (customer box, invoice metadata, bank details)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub heading: Option<String>,
    pub boxed: bool,
    pub entries: Vec<PanelEntry>,
}

/// One item-table column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// The configured field backing this column; `None` for synthesized
    /// columns such as the gst serial number
    pub field: Option<InvoiceField>,
    pub heading: String,
    pub align: Align,
}

/// Table dressing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStyle {
    /// Full cell border grid
    pub bordered: bool,
    /// Filled header row
    pub header_filled: bool,
    /// Alternating row shading
    pub zebra: bool,
    /// Headings rendered in uppercase
    pub uppercase_headings: bool,
    /// Wide letter-spaced headings
    pub letter_spaced: bool,
}

/// The line-item table
///
/// Rows hold display text: stored user text for the descriptive and
/// numeric-looking fields, and the fixed two-decimal amount for `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTable {
    pub style: TableStyle,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    /// Trailing label/amount row spanning the table (classic and gst)
    pub footer: Option<PanelEntry>,
}

impl ItemTable {
    /// Returns the column backed by the given field, if rendered
    pub fn column_for(&self, field: InvoiceField) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.field == Some(field))
    }
}

/// The totals summary panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsPanel {
    pub shaded: bool,
    /// Lead-in rows (the subtotal line)
    pub rows: Vec<PanelEntry>,
    /// The emphasized grand-total line
    pub emphasis: PanelEntry,
}

/// A layout block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Header(Header),
    /// Panels laid out side by side
    PanelRow(Vec<Panel>),
    ItemTable(ItemTable),
    Totals(TotalsPanel),
    AmountInWords { label: String, text: String },
    BankDetails(Panel),
    Notes { heading: Option<String>, text: String },
    Signature { left: Option<String>, right: Vec<String> },
}

/// A rendered, print-ready document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub template: TemplateKind,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(template: TemplateKind) -> Self {
        Self {
            template,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Returns the item table; every template emits exactly one
    pub fn item_table(&self) -> Option<&ItemTable> {
        self.blocks.iter().find_map(|block| match block {
            Block::ItemTable(table) => Some(table),
            _ => None,
        })
    }

    /// Returns the amount-in-words text
    pub fn amount_in_words(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::AmountInWords { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Returns the totals panel, if the template emits one
    pub fn totals(&self) -> Option<&TotalsPanel> {
        self.blocks.iter().find_map(|block| match block {
            Block::Totals(panel) => Some(panel),
            _ => None,
        })
    }
}
