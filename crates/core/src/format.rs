//! Display helpers for market figures.
//!
//! These only shape strings for screens; stored values are never rounded.

/// Fraction digits kept when grouping large figures (market cap, supply).
const GROUPED_MAX_DECIMALS: usize = 3;

fn group_int_digits(int_part: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        out.push(ch);
        let remaining = len.saturating_sub(i + 1);
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out
}

/// `1234567.891` → `1,234,567.891`; at most three fraction digits, trailing
/// zeros dropped.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", GROUPED_MAX_DECIMALS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let grouped = group_int_digits(int_part);
    let sign = if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Raw price as sent upstream, dollar-prefixed: `$50000`, `$0.0821`.
pub fn format_price(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", -value)
    } else {
        format!("${value}")
    }
}

/// Grouped dollar figure: `$1,234,567`.
pub fn format_usd_grouped(value: f64) -> String {
    let grouped = format_grouped(value);
    match grouped.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${grouped}"),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}
