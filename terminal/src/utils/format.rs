//! # Formatting Utilities
//!
//! Text formatting for list rows: currency amounts and transfer dates.
//!
//! ## Functions
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`currency`] - Format an amount with its ISO currency code
//! - [`long_date`] - Spelled-out date for sent-transfer details
//! - [`short_date`] - Compact date for received-transfer details

use chrono::{DateTime, Utc};

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = if parts.len() > 1 { parts[1] } else { "" };

    // Add commas to integer part, keeping a leading minus sign out of the grouping
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{sign}{integer_with_commas}")
    } else {
        format!("{sign}{integer_with_commas}.{decimal_part}")
    }
}

/// Format an amount with its currency code (e.g., "USD 1,234.50")
pub fn currency(amount: f64, currency_code: &str) -> String {
    format!("{} {}", currency_code, format_number(amount, 2))
}

/// Long date style used on sent-transfer rows (e.g. "March 1, 2026 at 9:30")
pub fn long_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y at %-H:%M").to_string()
}

/// Short date style used on received-transfer rows (e.g. "3/1/26, 9:30")
pub fn short_date(date: DateTime<Utc>) -> String {
    date.format("%-m/%-d/%y, %-H:%M").to_string()
}
