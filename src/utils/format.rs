//! Display formatting for dashboard numbers and addresses.

use super::conversion::str_to_f64_with_decimals;

/// Fraction digits shown for money values when the caller does not pin them.
pub const DEFAULT_MONEY_DECIMALS: usize = 4;

/// Fraction digits money values are never trimmed below.
pub const MIN_MONEY_DECIMALS: usize = 2;

/// Fraction digits shown for token amounts.
pub const TOKEN_DECIMALS: usize = 4;

/// Format a USD value, e.g. `$1,234.50`.
///
/// With `decimals` set, exactly that many fraction digits are shown. Without
/// it, up to [`DEFAULT_MONEY_DECIMALS`] are shown with trailing zeros trimmed
/// down to [`MIN_MONEY_DECIMALS`]. Non-zero values too small to show become
/// `<$0.01` (or the equivalent for the precision in use).
pub fn format_number_to_money(value: Option<f64>, decimals: Option<usize>) -> String {
    let max = decimals.unwrap_or(DEFAULT_MONEY_DECIMALS);
    let min = decimals.unwrap_or(MIN_MONEY_DECIMALS).min(max);

    let value = match value {
        Some(v) if v.is_finite() => v,
        _ => return format!("${:.*}", min, 0.0),
    };

    if let Some(floor) = below_precision(value, max) {
        return format!("<${}", floor);
    }

    let body = group_thousands(value.abs(), min, max);
    if value < 0.0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Format a token quantity, e.g. `1,234.5679`.
pub fn format_number_to_token(value: Option<f64>) -> String {
    let value = match value {
        Some(v) if v.is_finite() => v,
        _ => return String::from("0"),
    };

    if let Some(floor) = below_precision(value, TOKEN_DECIMALS) {
        return format!("<{}", floor);
    }

    let body = group_thousands(value.abs(), 0, TOKEN_DECIMALS);
    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Format a raw on-chain amount (smallest unit) as a token quantity.
pub fn format_token_amount(raw: Option<&str>, decimals: Option<u8>) -> String {
    let adjusted = raw.and_then(|r| str_to_f64_with_decimals(r, decimals.unwrap_or(0)));
    format_number_to_token(adjusted)
}

/// Shorten a long contract or account address to `ABCD...WXYZ`.
pub fn shorten_address(address: &str) -> String {
    const KEEP: usize = 4;

    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= KEEP * 2 + 3 {
        return address.to_string();
    }

    let head: String = chars[..KEEP].iter().collect();
    let tail: String = chars[chars.len() - KEEP..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Smallest displayable magnitude as a string when `value` is non-zero but
/// rounds away at `decimals` fraction digits.
fn below_precision(value: f64, decimals: usize) -> Option<String> {
    let floor = 10f64.powi(-(decimals as i32));
    if value != 0.0 && value.abs() < floor {
        Some(format!("{:.*}", decimals, floor))
    } else {
        None
    }
}

/// Render `value` with `max` fraction digits, trim trailing zeros down to
/// `min`, and separate thousands with commas.
fn group_thousands(value: f64, min: usize, max: usize) -> String {
    let fixed = format!("{:.*}", max, value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };

    let mut frac = frac_part.to_string();
    while frac.len() > min && frac.ends_with('0') {
        frac.pop();
    }

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    if frac.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac)
    }
}
