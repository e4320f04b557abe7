//! Cell content descriptions, behavior signatures, and value formatting.
//!
//! Renderers never paint anything: they return a [`CellContent`] describing
//! what the host widget should draw for a cell.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::row::Row;
use crate::schema::FilterValue;

/// Display format for timestamp cells.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display format for date-only cells.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What the host widget should draw inside a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellContent {
    /// Plain text.
    Text { text: String },
    /// Disabled placeholder for an empty value.
    Placeholder { text: String },
    /// Affirmative glyph (boolean true).
    Check,
    /// Negative glyph (boolean false).
    Cross,
    /// Single thumbnail.
    Image { url: String },
    /// Horizontal strip of thumbnails.
    ImageStrip { urls: Vec<String> },
}

impl CellContent {
    /// Convenience constructor for text content.
    pub fn text(text: impl Into<String>) -> Self {
        CellContent::Text { text: text.into() }
    }
}

/// Renders one cell: receives the column's value (if any) and the full row.
pub type Renderer = Arc<dyn Fn(Option<&Value>, &Row) -> CellContent + Send + Sync>;

/// Orders two rows for a column.
pub type Sorter = Arc<dyn Fn(&Row, &Row) -> Ordering + Send + Sync>;

/// Decides whether a row matches a selected filter value.
pub type FilterPredicate = Arc<dyn Fn(&FilterValue, &Row) -> bool + Send + Sync>;

/// Renders an expanded row body.
pub type RowRenderer = Arc<dyn Fn(&Row, usize) -> CellContent + Send + Sync>;

/// Invoked when the row selection changes, with selected keys and rows.
pub type SelectionCallback = Arc<dyn Fn(&[Value], &[Row]) + Send + Sync>;

/// Format a monetary value: `￥` prefix, thousands separators, two decimals
/// with a trailing `.00` stripped for whole numbers.
pub fn format_money(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };
    let grouped = group_thousands(int_part);
    if frac == "00" {
        format!("￥{grouped}")
    } else {
        format!("￥{grouped}.{frac}")
    }
}

/// Format a percentage value with two decimals.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Insert thousands separators into a (possibly signed) integer string.
fn group_thousands(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

/// Parse a cell value as a timestamp.
///
/// Accepts RFC 3339 strings, common `YYYY-MM-DD[ HH:MM:SS]` shapes, and
/// numeric epoch milliseconds. Returns `None` for anything else; callers
/// treat unparseable values the same as missing ones.
pub fn parse_timestamp(value: Option<&Value>) -> Option<NaiveDateTime> {
    match value? {
        Value::Number(n) => {
            let millis = n.as_i64()?;
            DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
        }
        Value::String(s) => parse_timestamp_str(s.trim()),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_money_whole_number() {
        assert_eq!(format_money(1234.0), "￥1,234");
    }

    #[test]
    fn test_format_money_fractional() {
        assert_eq!(format_money(1234.5), "￥1,234.50");
    }

    #[test]
    fn test_format_money_small_and_negative() {
        assert_eq!(format_money(0.0), "￥0");
        assert_eq!(format_money(999.0), "￥999");
        assert_eq!(format_money(1000000.25), "￥1,000,000.25");
        assert_eq!(format_money(-1234.5), "￥-1,234.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.3456), "12.35%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 0));
        assert_eq!(
            parse_timestamp(Some(&json!("2024-03-01 12:30:00"))),
            expected
        );
        assert_eq!(
            parse_timestamp(Some(&json!("2024-03-01T12:30:00"))),
            expected
        );

        let midnight = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0));
        assert_eq!(parse_timestamp(Some(&json!("2024-03-01"))), midnight);
    }

    #[test]
    fn test_parse_timestamp_epoch_millis() {
        let parsed = parse_timestamp(Some(&json!(0)));
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(1970, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn test_parse_timestamp_garbage() {
        assert_eq!(parse_timestamp(Some(&json!("not a date"))), None);
        assert_eq!(parse_timestamp(Some(&json!(true))), None);
        assert_eq!(parse_timestamp(None), None);
    }
}
