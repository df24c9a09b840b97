//! French-locale display formatting for dates and prices.
//!
//! Output follows the browser's `fr-FR` conventions: long month names,
//! narrow no-break space between digit groups, comma decimal separator and a
//! no-break space before the currency symbol.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Narrow no-break space (U+202F) between thousands groups.
const GROUP_SEPARATOR: char = '\u{202F}';
/// No-break space (U+00A0) before the currency symbol.
const SYMBOL_SEPARATOR: char = '\u{00A0}';

fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// `2026-10-17T08:00:00Z` → `17 octobre 2026`. Unparseable input is
/// returned as-is.
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => {
            let month = MONTHS_FR[date.month0() as usize];
            format!("{} {month} {}", date.day(), date.year())
        }
        None => input.to_owned(),
    }
}

fn currency_symbol(code: &str) -> &str {
    match code {
        "EUR" => "€",
        "USD" => "$US",
        "GBP" => "£GB",
        "JPY" => "JPY",
        other => other,
    }
}

fn fraction_digits(code: &str) -> u32 {
    match code {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// `1234.5, "EUR"` → `1 234,50 €`. Unknown codes are printed as the code.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let decimals = fraction_digits(&code);
    let scale = 10_u64.pow(decimals);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let scaled = (amount.abs() * scale as f64).round() as u64;
    let whole = group_thousands(&(scaled / scale).to_string());
    let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };
    let symbol = currency_symbol(&code);
    if decimals == 0 {
        format!("{sign}{whole}{SYMBOL_SEPARATOR}{symbol}")
    } else {
        let frac = scaled % scale;
        let width = decimals as usize;
        format!("{sign}{whole},{frac:0width$}{SYMBOL_SEPARATOR}{symbol}")
    }
}
