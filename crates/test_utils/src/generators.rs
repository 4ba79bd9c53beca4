//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_config::InvoiceField;
use domain_invoice::InvoiceItem;
use proptest::prelude::*;

/// Strategy for generating any invoice field
pub fn field_strategy() -> impl Strategy<Value = InvoiceField> {
    prop::sample::select(InvoiceField::CANONICAL_ORDER.to_vec())
}

/// Strategy for generating a field that affects line totals
pub fn amount_field_strategy() -> impl Strategy<Value = InvoiceField> {
    prop_oneof![Just(InvoiceField::Weight), Just(InvoiceField::Price)]
}

/// Strategy for generating numeric entry text as a user would type it
pub fn numeric_text_strategy() -> impl Strategy<Value = String> {
    (0u32..1_000_000u32, 0u32..100u32)
        .prop_map(|(whole, frac)| format!("{whole}.{frac:02}"))
}

/// Strategy for generating free-form entry text, including non-numeric junk
pub fn entry_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        numeric_text_strategy(),
        Just(String::new()),
        "[a-zA-Z ]{1,12}",
    ]
}

/// Strategy for generating an item whose total matches its weight and price
pub fn item_strategy() -> impl Strategy<Value = InvoiceItem> {
    (numeric_text_strategy(), numeric_text_strategy(), 1u32..1000u32).prop_map(
        |(weight, price, nos)| {
            let mut item = InvoiceItem::blank();
            item.nos = nos.to_string();
            item.weight = weight;
            item.price = price;
            item.total = item.weight.trim().parse::<f64>().unwrap_or(0.0)
                * item.price.trim().parse::<f64>().unwrap_or(0.0);
            item
        },
    )
}

/// Strategy for generating a non-empty list of consistent items
pub fn items_strategy() -> impl Strategy<Value = Vec<InvoiceItem>> {
    prop::collection::vec(item_strategy(), 1..8)
}
