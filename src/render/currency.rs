//! Currency formatting: symbol prefix, thousands separators, no decimals.
//!
//! Formatting rounds for display only; the underlying amounts stay exact
//! in the domain layer.

use crate::domain::foundation::Money;

/// Formats an amount like `$1,234,567` (negatives as `-$1,234`).
pub fn format_currency(symbol: &str, value: Money) -> String {
    let rounded = value.amount().round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_thousands(rounded.unsigned_abs()))
}

/// Formats like [`format_currency`], but renders an unset (zero) amount
/// as an em dash placeholder.
pub fn format_currency_or_dash(symbol: &str, value: Money) -> String {
    if value.is_zero() {
        "—".to_string()
    } else {
        format_currency(symbol, value)
    }
}

fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }

    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(group) = groups.pop() {
        out.push_str(&format!(",{:03}", group));
    }
    out
}
