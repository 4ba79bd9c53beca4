//! Customer records
//!
//! Customers are flat address-book entries. No relationship is enforced
//! between a customer and the invoices that name them: invoice header fields
//! are copied at drafting time and never track later customer edits.

use serde::{Deserialize, Serialize};

use core_kernel::CustomerId;

/// The editable customer fields, sent without an id on create/update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub name: String,
    pub address: String,
    pub gst: String,
    pub pan: String,
    pub mobile: String,
    pub email: String,
}

/// A stored customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(flatten)]
    pub profile: CustomerProfile,
}
