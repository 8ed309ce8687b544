//! Display formatting helpers. All rounding is done here, at presentation
//! time — stored and computed values are never rounded.

use chrono::{DateTime, Utc};

/// Format a converted work-time quantity to one decimal place.
#[must_use]
pub fn format_quantity(value: f64) -> String {
    format!("{value:.1}")
}

/// Format a monetary amount with its currency symbol as prefix,
/// two decimals, and thousands separators (e.g., "₺1,234.50").
#[must_use]
pub fn format_currency(amount: f64, currency: &str) -> String {
    format!("{currency}{}", group_thousands(amount))
}

/// Format a timestamp as "Jul 31, 2025".
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn group_thousands(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
