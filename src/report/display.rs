//! Human-readable amounts for terminal output
//!
//! Both formatters round half away from zero and keep the sign of a negative
//! value that rounds to zero, so `-0.4` dollars prints as `-$0`.

use crate::profile::Currency;
use crate::projection::round_half_away;

/// Whole-unit amount with symbol and thousands separators, e.g. `$52,500`
pub fn format_currency(value: f64, currency: Currency) -> String {
    let rounded = value.round();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}{}", sign, currency.symbol(), group_thousands(&digits))
}

/// Percentage with one decimal and thousands separators, e.g. `2,884.5%`
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}%", value);
    }
    let rounded = round_half_away(value, 1);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.1}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "0"));
    format!("{}{}.{}%", sign, group_thousands(whole), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
