use chrono::{Datelike, NaiveDate};

use tradelink_model::{Column, ColumnClass};

use crate::reader::CellHint;

/// Highest serial the 1900 date system can express (9999-12-31).
const MAX_DATE_SERIAL: f64 = 2_958_465.0;

/// Date string formats seen in real-world exports, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Coerce one raw cell into the canonical string form for its column.
///
/// Pure and total: never errors, never panics. Input that cannot be
/// interpreted for the column's class degrades to the trimmed original,
/// so one bad cell cannot fail a row and one bad row cannot fail a file.
pub fn coerce(column: Column, raw: &str, hint: CellHint) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match column.class() {
        ColumnClass::Date => coerce_date(trimmed, hint),
        ColumnClass::Money => coerce_money(trimmed),
        ColumnClass::Quantity => coerce_quantity(trimmed),
        ColumnClass::Text => trimmed.to_string(),
    }
}

// ── Dates ───────────────────────────────────────────────────────────

fn coerce_date(trimmed: &str, hint: CellHint) -> String {
    if let Ok(serial) = trimmed.parse::<f64>() {
        let plausible = (1.0..=MAX_DATE_SERIAL).contains(&serial);
        if hint == CellHint::DateSerial || plausible {
            if let Some(date) = serial_to_date(serial) {
                return format_mdy(date);
            }
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return format_mdy(date);
        }
    }
    trimmed.to_string()
}

/// Decode a 1900-system spreadsheet date serial (day 1 = 1900-01-01).
///
/// Serials above 60 are offset by one to compensate for the phantom
/// 1900-02-29 the format inherited from Lotus 1-2-3.
fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=MAX_DATE_SERIAL).contains(&serial) {
        return None;
    }
    let mut days = serial.floor() as i64;
    if days > 60 {
        days -= 1;
    }
    NaiveDate::from_ymd_opt(1899, 12, 31)
        .and_then(|base| base.checked_add_signed(chrono::Duration::days(days)))
}

/// Canonical date form: `M/D/YYYY`, no zero padding.
fn format_mdy(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Parse a number that may carry comma thousands separators.
fn parse_loose_number(trimmed: &str) -> Option<f64> {
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    let n: f64 = cleaned.trim().parse().ok()?;
    n.is_finite().then_some(n)
}

fn coerce_money(trimmed: &str) -> String {
    match parse_loose_number(trimmed) {
        Some(n) => format_grouped(n, 2),
        None => trimmed.to_string(),
    }
}

fn coerce_quantity(trimmed: &str) -> String {
    match parse_loose_number(trimmed) {
        Some(n) if n.fract() == 0.0 && n.abs() < 1e15 => format_grouped(n, 0),
        Some(n) => {
            // Up to two decimals: render with two, drop trailing zeros.
            let s = format_grouped(n, 2);
            let s = s.trim_end_matches('0').trim_end_matches('.');
            s.to_string()
        }
        None => trimmed.to_string(),
    }
}

/// Format with the given decimal count and comma thousands separators.
fn format_grouped(n: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, n.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let grouped = group_thousands(int_part);
    let sign = if n < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
