//! Template Rendering Engine
//!
//! Six interchangeable renderers turn an invoice and a field configuration
//! into a structured, print-ready [`Document`]. The variants are a closed,
//! tag-discriminated set sharing one contract; they differ in block styling
//! and layout density, never in data semantics.
//!
//! Five templates derive their item-table columns live from the field
//! configuration. The sixth, `gst`, is the statutory tax-invoice form
//! factor: its seven-column layout is hard-coded and the configuration is
//! deliberately ignored.
//!
//! Rendering never fails on structurally valid input. A zero-item invoice
//! yields an empty table body with a zero grand total, and a stored
//! `grand_total` that disagrees with the item sum is printed as-is -
//! validating computation invariants is the computation engine's job at
//! mutation time, not the renderer's.

mod common;
pub mod document;
pub mod templates;

pub use document::{
    Align, Block, Column, Document, Header, HeaderStyle, ItemTable, Panel, PanelEntry,
    TableStyle, TotalsPanel,
};

use domain_config::{FieldConfiguration, TemplateKind};
use domain_invoice::Invoice;

/// Renders an invoice with the given template variant
pub fn render(kind: TemplateKind, invoice: &Invoice, fields: &FieldConfiguration) -> Document {
    match kind {
        TemplateKind::Classic => templates::classic::render(invoice, fields),
        TemplateKind::Modern => templates::modern::render(invoice, fields),
        TemplateKind::Minimal => templates::minimal::render(invoice, fields),
        TemplateKind::Professional => templates::professional::render(invoice, fields),
        TemplateKind::Elegant => templates::elegant::render(invoice, fields),
        // The statutory layout has fixed columns and takes no field configuration.
        TemplateKind::Gst => templates::gst::render(invoice),
    }
}
