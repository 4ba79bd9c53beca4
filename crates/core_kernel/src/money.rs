//! Amount formatting for invoice display
//!
//! Invoice amounts travel the wire as plain numbers and are rendered either
//! as a fixed two-decimal figure (table cells) or with Indian digit grouping
//! (currency panels). Rounding for display goes through rust_decimal so a
//! float like 42595.00000000001 prints as 42595.00.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two decimal places for display
fn display_decimal(amount: f64) -> Decimal {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    Decimal::from_f64(amount)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimal digits and no grouping
///
/// This is the form used inside item tables and total rows.
pub fn format_plain(amount: f64) -> String {
    format!("{:.2}", display_decimal(amount))
}

/// Formats an amount with Indian digit grouping and two decimal digits
///
/// Grouping follows the en-IN locale: the last three integer digits form one
/// group, every group before that holds two digits (`1234567.8` becomes
/// `12,34,567.80`). Negative amounts render with a leading minus sign.
pub fn format_currency(amount: f64) -> String {
    let rounded = display_decimal(amount);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain
        .split_once('.')
        .unwrap_or((plain.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 2);
    for (i, ch) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_two_decimals() {
        assert_eq!(format_plain(42595.0), "42595.00");
        assert_eq!(format_plain(183902.4), "183902.40");
        assert_eq!(format_plain(0.0), "0.00");
    }

    #[test]
    fn test_plain_absorbs_float_noise() {
        assert_eq!(format_plain(42595.000000000015), "42595.00");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(137069.0), "1,37,069.00");
        assert_eq!(format_currency(1234567.8), "12,34,567.80");
        assert_eq!(format_currency(999.5), "999.50");
        assert_eq!(format_currency(42595.0), "42,595.00");
    }

    #[test]
    fn test_small_amounts_not_grouped() {
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(100.0), "100.00");
    }

    #[test]
    fn test_negative_renders_minus_sign() {
        assert_eq!(format_currency(-42595.0), "-42,595.00");
        assert_eq!(format_plain(-1.5), "-1.50");
    }

    #[test]
    fn test_non_finite_treated_as_zero() {
        assert_eq!(format_currency(f64::NAN), "0.00");
        assert_eq!(format_plain(f64::INFINITY), "0.00");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn currency_always_has_two_decimals(amount in -1_000_000_000.0f64..1_000_000_000.0f64) {
            let formatted = format_currency(amount);
            let (_, frac) = formatted.rsplit_once('.').unwrap();
            prop_assert_eq!(frac.len(), 2);
        }

        #[test]
        fn grouping_preserves_digits(amount in 0.0f64..1_000_000_000.0f64) {
            let grouped: String = format_currency(amount)
                .chars()
                .filter(|c| *c != ',')
                .collect();
            prop_assert_eq!(grouped, format_plain(amount));
        }
    }
}
