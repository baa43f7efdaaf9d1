//! Best-effort conversion of raw text cells into numbers.

use crate::model::Cell;

/// Converts raw cell text into the most specific value it represents.
///
/// Digit-only text becomes an [`Cell::Integer`], leading zeros included
/// (`"007"` turns into `7`). Other text that parses as a finite decimal number
/// becomes a [`Cell::Float`]. Everything else is returned untouched as
/// [`Cell::Text`]; this function never fails.
pub fn coerce(text: &str) -> Cell {
    if let Some(value) = parse_integer(text) {
        return Cell::Integer(value);
    }
    if let Some(value) = parse_float(text) {
        return Cell::Float(value);
    }
    Cell::Text(text.to_string())
}

/// Coerces every value of a row, keeping column order.
pub fn coerce_row(row: &[String]) -> Vec<Cell> {
    row.iter().map(|value| coerce(value)).collect()
}

fn parse_integer(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    // Digit strings beyond i64 fall through to the float attempt.
    text.parse().ok()
}

fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
