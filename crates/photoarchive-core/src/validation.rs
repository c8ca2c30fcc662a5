//! Field validation and input parsing.
//!
//! All checks are pure. Callers that collect input interactively are
//! expected to re-prompt until a check passes.

use crate::error::{ArchiveError, Result};
use crate::photo::TextField;

/// Delimiter used by the flat-file format; free text must not contain it.
pub const FIELD_DELIMITER: char = '|';

const MIN_YEAR: u32 = 1900;
const MAX_YEAR: u32 = 2100;

/// Check a `YYYY-MM-DD` date.
///
/// Only numeric ranges are checked: year 1900..=2100, month 1..=12 and
/// day 1..=31 regardless of month, so `2024-02-30` is accepted.
pub fn validate_date(text: &str) -> Result<()> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 {
        return Err(ArchiveError::Validation(format!(
            "Date must be exactly 10 characters (YYYY-MM-DD): {}",
            text
        )));
    }
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(ArchiveError::Validation(format!(
            "Date must use YYYY-MM-DD: {}",
            text
        )));
    }

    let year = date_group(text, 0..4)?;
    let month = date_group(text, 5..7)?;
    let day = date_group(text, 8..10)?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ArchiveError::Validation(format!(
            "Year must be between {} and {}: {}",
            MIN_YEAR, MAX_YEAR, year
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(ArchiveError::Validation(format!(
            "Month must be between 1 and 12: {}",
            month
        )));
    }
    if !(1..=31).contains(&day) {
        return Err(ArchiveError::Validation(format!(
            "Day must be between 1 and 31: {}",
            day
        )));
    }
    Ok(())
}

fn date_group(text: &str, range: std::ops::Range<usize>) -> Result<u32> {
    let group = text
        .get(range)
        .filter(|group| group.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| {
            ArchiveError::Validation(format!("Date must contain only digits: {}", text))
        })?;
    group
        .parse()
        .map_err(|_| ArchiveError::Validation(format!("Invalid date: {}", text)))
}

/// Check that a real number is strictly positive.
pub fn validate_positive_number(value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ArchiveError::Validation(format!(
            "Value must be a positive number: {}",
            value
        )))
    }
}

/// Check that an integer is strictly positive.
pub fn validate_positive_integer(value: i64) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(ArchiveError::Validation(format!(
            "Value must be a positive integer: {}",
            value
        )))
    }
}

/// Check a free-text field against its length limit and the file format.
///
/// The flat-file format does no escaping, so the delimiter and line breaks
/// are rejected here.
pub fn validate_text_field(field: TextField, value: &str) -> Result<()> {
    let chars = value.chars().count();
    if chars > field.max_chars() {
        return Err(ArchiveError::Validation(format!(
            "{} is too long ({} characters, max {})",
            field.label(),
            chars,
            field.max_chars()
        )));
    }
    if value.contains(FIELD_DELIMITER) {
        return Err(ArchiveError::Validation(format!(
            "{} must not contain '{}'",
            field.label(),
            FIELD_DELIMITER
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(ArchiveError::Validation(format!(
            "{} must be a single line",
            field.label()
        )));
    }
    Ok(())
}

/// Parse a size in megabytes, accepting either `,` or `.` as decimal separator.
///
/// The archive stores two decimals, so sizes that round to `0.00` are
/// rejected.
pub fn parse_size(text: &str) -> Result<f64> {
    let normalized = text.trim().replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| {
        ArchiveError::Validation(format!(
            "Invalid size: {} (expected a number such as 4.50 or 4,50)",
            text.trim()
        ))
    })?;
    if !value.is_finite() {
        return Err(ArchiveError::Validation(format!(
            "Invalid size: {}",
            text.trim()
        )));
    }
    validate_positive_number(value)?;
    if (value * 100.0).round() < 1.0 {
        return Err(ArchiveError::Validation(format!(
            "Size must be at least 0.01 MB: {}",
            text.trim()
        )));
    }
    Ok(value)
}

/// Parse a pixel dimension (width or height).
pub fn parse_dimension(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        ArchiveError::Validation(format!(
            "Invalid dimension: {} (expected a whole number such as 1920)",
            trimmed
        ))
    })?;
    validate_positive_integer(value)?;
    u32::try_from(value)
        .map_err(|_| ArchiveError::Validation(format!("Dimension too large: {}", value)))
}
