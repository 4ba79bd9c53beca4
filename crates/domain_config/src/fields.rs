//! Line-item field configuration
//!
//! The seven line-item columns are a closed set. A field configuration stores
//! an enabled flag and a display label for each one; the five configurable
//! templates derive their table columns from it. `Total` is the one field
//! that can never be disabled - turning it off is a defined no-op, not an
//! error, because every template must print an amount column.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven known line-item fields, in canonical column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceField {
    KhataName,
    PriceType,
    Cut,
    Nos,
    Weight,
    Price,
    Total,
}

impl InvoiceField {
    /// Canonical column order; renderers must never reorder by label or
    /// insertion time
    pub const CANONICAL_ORDER: [InvoiceField; 7] = [
        InvoiceField::KhataName,
        InvoiceField::PriceType,
        InvoiceField::Cut,
        InvoiceField::Nos,
        InvoiceField::Weight,
        InvoiceField::Price,
        InvoiceField::Total,
    ];

    /// The wire name used in settings payloads
    pub fn wire_name(&self) -> &'static str {
        match self {
            InvoiceField::KhataName => "khataName",
            InvoiceField::PriceType => "priceType",
            InvoiceField::Cut => "cut",
            InvoiceField::Nos => "nos",
            InvoiceField::Weight => "weight",
            InvoiceField::Price => "price",
            InvoiceField::Total => "total",
        }
    }

    /// The built-in display label
    pub fn default_label(&self) -> &'static str {
        match self {
            InvoiceField::KhataName => "Khata Name",
            InvoiceField::PriceType => "Price Type",
            InvoiceField::Cut => "Cut",
            InvoiceField::Nos => "Nos",
            InvoiceField::Weight => "Weight",
            InvoiceField::Price => "Price",
            InvoiceField::Total => "Total",
        }
    }

    /// True for the mandatory amount column
    pub fn is_mandatory(&self) -> bool {
        matches!(self, InvoiceField::Total)
    }
}

impl fmt::Display for InvoiceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Enabled flag and display label for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub enabled: bool,
    pub label: String,
}

impl FieldDescriptor {
    pub fn new(enabled: bool, label: impl Into<String>) -> Self {
        Self {
            enabled,
            label: label.into(),
        }
    }
}

/// Fixed-key mapping from the seven fields to their descriptors
///
/// Stored as one descriptor per canonical slot so iteration order is the
/// canonical order by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfiguration {
    khata_name: FieldDescriptor,
    price_type: FieldDescriptor,
    cut: FieldDescriptor,
    nos: FieldDescriptor,
    weight: FieldDescriptor,
    price: FieldDescriptor,
    total: FieldDescriptor,
}

impl Default for FieldConfiguration {
    fn default() -> Self {
        let descriptor = |field: InvoiceField| FieldDescriptor::new(true, field.default_label());
        Self {
            khata_name: descriptor(InvoiceField::KhataName),
            price_type: descriptor(InvoiceField::PriceType),
            cut: descriptor(InvoiceField::Cut),
            nos: descriptor(InvoiceField::Nos),
            weight: descriptor(InvoiceField::Weight),
            price: descriptor(InvoiceField::Price),
            total: descriptor(InvoiceField::Total),
        }
    }
}

impl FieldConfiguration {
    /// Returns the descriptor for a field
    pub fn descriptor(&self, field: InvoiceField) -> &FieldDescriptor {
        match field {
            InvoiceField::KhataName => &self.khata_name,
            InvoiceField::PriceType => &self.price_type,
            InvoiceField::Cut => &self.cut,
            InvoiceField::Nos => &self.nos,
            InvoiceField::Weight => &self.weight,
            InvoiceField::Price => &self.price,
            InvoiceField::Total => &self.total,
        }
    }

    fn descriptor_mut(&mut self, field: InvoiceField) -> &mut FieldDescriptor {
        match field {
            InvoiceField::KhataName => &mut self.khata_name,
            InvoiceField::PriceType => &mut self.price_type,
            InvoiceField::Cut => &mut self.cut,
            InvoiceField::Nos => &mut self.nos,
            InvoiceField::Weight => &mut self.weight,
            InvoiceField::Price => &mut self.price,
            InvoiceField::Total => &mut self.total,
        }
    }

    /// Enables or disables a field
    ///
    /// Disabling [`InvoiceField::Total`] is silently ignored; the amount
    /// column is a product rule, not a preference.
    pub fn set_enabled(&mut self, field: InvoiceField, enabled: bool) {
        if field.is_mandatory() && !enabled {
            return;
        }
        self.descriptor_mut(field).enabled = enabled;
    }

    /// Overrides the display label for a field
    ///
    /// An empty label falls back to the field's built-in label.
    pub fn set_label(&mut self, field: InvoiceField, label: impl Into<String>) {
        let label = label.into();
        self.descriptor_mut(field).label = if label.is_empty() {
            field.default_label().to_string()
        } else {
            label
        };
    }

    /// True when the field's column should be rendered
    pub fn is_enabled(&self, field: InvoiceField) -> bool {
        self.descriptor(field).enabled
    }

    /// Returns the enabled fields with their descriptors, in canonical order
    pub fn enabled_fields(&self) -> Vec<(InvoiceField, &FieldDescriptor)> {
        InvoiceField::CANONICAL_ORDER
            .iter()
            .map(|field| (*field, self.descriptor(*field)))
            .filter(|(_, descriptor)| descriptor.enabled)
            .collect()
    }

    /// Restores every field to enabled with its built-in label
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
