//! Display Formatting
//!
//! String helpers for table cells. These only format; they never validate.

use chrono::NaiveDate;

use super::catalog::Currency;

/// Join co-owner names for display, or a single dash when there are none
pub fn join_co_owners(co_owners: &[String]) -> String {
    if co_owners.is_empty() {
        "-".to_string()
    } else {
        co_owners.join(", ")
    }
}

pub fn format_rent(amount: f64, currency: Currency) -> String {
    format!("{} {}", amount, currency.code())
}

pub fn format_period(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start, end)
}

/// Format a Romanian phone number as `+40 722 123 456`
///
/// Spaces, dashes and parentheses are ignored, and a leading `+40`, `0040`
/// or `0` is dropped. Anything that does not reduce to nine digits is
/// returned unchanged.
pub fn format_phone(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();

    let national = cleaned
        .strip_prefix("+40")
        .or_else(|| cleaned.strip_prefix("0040"))
        .or_else(|| cleaned.strip_prefix('0'))
        .unwrap_or(&cleaned);

    if national.len() == 9 && national.bytes().all(|b| b.is_ascii_digit()) {
        format!("+40 {} {} {}", &national[..3], &national[3..6], &national[6..])
    } else {
        phone.to_string()
    }
}
