//! Template variant selector

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::CoreError;

/// The closed set of document layouts
///
/// Six variants share the same `render(invoice, field_config)` contract and
/// differ only in block styling and layout density. `Gst` is the statutory
/// tax-invoice form factor: it hard-codes its column set and ignores the
/// field configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Classic,
    Modern,
    Minimal,
    Professional,
    Elegant,
    Gst,
}

impl TemplateKind {
    /// All variants, in presentation order
    pub const ALL: [TemplateKind; 6] = [
        TemplateKind::Classic,
        TemplateKind::Modern,
        TemplateKind::Minimal,
        TemplateKind::Professional,
        TemplateKind::Elegant,
        TemplateKind::Gst,
    ];

    /// The identifier used in settings payloads and the PDF endpoint query
    pub fn wire_name(&self) -> &'static str {
        match self {
            TemplateKind::Classic => "classic",
            TemplateKind::Modern => "modern",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Professional => "professional",
            TemplateKind::Elegant => "elegant",
            TemplateKind::Gst => "gst",
        }
    }

    /// Human-readable name for selection lists
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::Classic => "Classic",
            TemplateKind::Modern => "Modern",
            TemplateKind::Minimal => "Minimal",
            TemplateKind::Professional => "Professional",
            TemplateKind::Elegant => "Elegant",
            TemplateKind::Gst => "GST",
        }
    }

    /// True when the variant derives its columns from the field configuration
    pub fn is_configurable(&self) -> bool {
        !matches!(self, TemplateKind::Gst)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl FromStr for TemplateKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(TemplateKind::Classic),
            "modern" => Ok(TemplateKind::Modern),
            "minimal" => Ok(TemplateKind::Minimal),
            "professional" => Ok(TemplateKind::Professional),
            "elegant" => Ok(TemplateKind::Elegant),
            "gst" => Ok(TemplateKind::Gst),
            other => Err(CoreError::validation(format!(
                "unknown template variant: {other}"
            ))),
        }
    }
}
