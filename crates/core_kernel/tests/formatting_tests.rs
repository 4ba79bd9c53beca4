//! Tests for the public amount formatting API

use core_kernel::{amount_in_words, format_currency, format_plain};

#[test]
fn test_words_spec_magnitudes() {
    let cases = [
        (0.0, "Zero"),
        (7.0, "Seven"),
        (42.0, "Forty Two"),
        (500.0, "Five Hundred"),
        (42595.0, "Forty Two Thousand Five Hundred Ninety Five"),
        (900_000_007.0, "Nine Hundred Million Seven"),
        (1_000_000_000.0, "One Billion"),
    ];

    for (amount, expected) in cases {
        assert_eq!(amount_in_words(amount), expected, "amount {amount}");
    }
}

#[test]
fn test_words_caller_appends_currency() {
    // The formatter is currency-agnostic; the invoice layer appends the unit.
    let phrase = format!("{} Rupees Only", amount_in_words(42595.0));
    assert_eq!(
        phrase,
        "Forty Two Thousand Five Hundred Ninety Five Rupees Only"
    );
}

#[test]
fn test_currency_and_plain_agree_on_value() {
    let amount = 183902.4;
    assert_eq!(format_plain(amount), "183902.40");
    assert_eq!(format_currency(amount), "1,83,902.40");
}
