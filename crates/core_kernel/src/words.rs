//! Amount-in-words conversion
//!
//! Converts a grand total into the spelled-out English phrase printed on the
//! invoice as a legal confirmation of the numeric amount. The conversion is
//! currency-agnostic; callers append the currency name ("Rupees Only").

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Short-scale magnitude names, paired with their power-of-ten divisor.
const SCALES: [(u64, &str); 4] = [
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Converts an amount into title-cased English words
///
/// The amount is floored before conversion; fractional paise are not spoken.
/// Zero and negative amounts yield `"Zero"`. Values through the trillions are
/// supported without truncation.
///
/// ```
/// use core_kernel::amount_in_words;
///
/// assert_eq!(
///     amount_in_words(42595.0),
///     "Forty Two Thousand Five Hundred Ninety Five"
/// );
/// ```
pub fn amount_in_words(amount: f64) -> String {
    // The floor happens before the zero check, so anything below one
    // rupee speaks as "Zero".
    if !amount.is_finite() || amount < 1.0 {
        return "Zero".to_string();
    }

    let mut value = amount.floor() as u64;
    let mut words: Vec<&str> = Vec::new();

    for (divisor, name) in SCALES {
        if value >= divisor {
            push_under_thousand((value / divisor) as u16, &mut words);
            words.push(name);
            value %= divisor;
        }
    }
    if value > 0 {
        push_under_thousand(value as u16, &mut words);
    }

    words
        .iter()
        .map(|word| title_case(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_under_thousand(value: u16, words: &mut Vec<&'static str>) {
    let hundreds = value / 100;
    let rest = value % 100;

    if hundreds > 0 {
        words.push(ONES[hundreds as usize]);
        words.push("hundred");
    }
    if rest >= 20 {
        words.push(TENS[(rest / 10) as usize]);
        if rest % 10 > 0 {
            words.push(ONES[(rest % 10) as usize]);
        }
    } else if rest > 0 {
        words.push(ONES[rest as usize]);
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
