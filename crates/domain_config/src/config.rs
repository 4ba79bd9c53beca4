//! Tenant invoice configuration aggregate

use serde::{Deserialize, Serialize};

use crate::fields::FieldConfiguration;
use crate::template::TemplateKind;

/// Business identity printed in the invoice header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub address: String,
    pub gst: String,
    pub pan: String,
    pub mobile: String,
    pub email: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "MANOJ BHAI KAVAD".to_string(),
            address: "Plot No. 40/41, 3rd Floor, Vithal Nagar Soc., Motiyawadi, Varachha Road, Surat"
                .to_string(),
            gst: String::new(),
            pan: "FHRPK3434H".to_string(),
            mobile: String::new(),
            email: String::new(),
        }
    }
}

/// Bank details printed in the payment block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankProfile {
    pub bank_name: String,
    pub branch: String,
    pub account_number: String,
    pub ifsc: String,
}

impl Default for BankProfile {
    fn default() -> Self {
        Self {
            bank_name: "The Varachha Co. Bank Ltd".to_string(),
            branch: "Pune Gram Canal Road".to_string(),
            account_number: "00710120471024".to_string(),
            ifsc: "VARA0289007".to_string(),
        }
    }
}

/// Defaults applied to every newly drafted invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDefaults {
    pub invoice_prefix: String,
    pub default_notes: String,
    pub default_place_of_supply: String,
}

impl Default for InvoiceDefaults {
    fn default() -> Self {
        Self {
            invoice_prefix: "INV-".to_string(),
            default_notes: "Goods sold and Delivered at Hand To Hand\nSubject to Surat Jurisdiction"
                .to_string(),
            default_place_of_supply: "Gujarat".to_string(),
        }
    }
}

/// The per-tenant invoice configuration
///
/// Exactly one of these exists per authenticated session. The remote
/// collaborator persists it as the `/settings` singleton; when no session is
/// active the built-in default applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceConfig {
    pub fields: FieldConfiguration,
    pub default_template: TemplateKind,
    pub business: BusinessProfile,
    pub bank: BankProfile,
    pub invoice_defaults: InvoiceDefaults,
}
