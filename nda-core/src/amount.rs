//! Approximate amount-to-words conversion for Rand figures.
//!
//! This is not a numerals-to-words engine. Remainders are dropped above ten
//! thousand, and hundreds of thousands only collapse to "N Hundred Thousand"
//! on exact multiples from 200 000 upwards (100 000 stays "100 Thousand").
//! The output must stay byte-for-byte stable for existing agreements.

/// Render `amount` the way agreement figures have always been written.
///
/// ```
/// use nda_core::amount_in_words;
///
/// assert_eq!(amount_in_words(50_000), "50 Thousand");
/// assert_eq!(amount_in_words(1_500_000), "1 Million 500 Thousand");
/// ```
pub fn amount_in_words(amount: u64) -> String {
    match amount {
        0 => "Zero".to_string(),
        1..=999 => amount.to_string(),
        1_000..=9_999 => {
            let thousands = amount / 1_000;
            match amount % 1_000 {
                0 => format!("{thousands} Thousand"),
                remainder => format!("{thousands} Thousand {remainder}"),
            }
        }
        10_000..=99_999 => format!("{} Thousand", amount / 1_000),
        100_000..=999_999 => {
            let thousands = amount / 1_000;
            if thousands % 100 == 0 && thousands > 100 {
                format!("{} Hundred Thousand", thousands / 100)
            } else {
                format!("{thousands} Thousand")
            }
        }
        _ => {
            let millions = amount / 1_000_000;
            match amount % 1_000_000 {
                0 => format!("{millions} Million"),
                remainder @ 1..=999 => format!("{millions} Million {remainder}"),
                remainder => format!("{millions} Million {} Thousand", remainder / 1_000),
            }
        }
    }
}
