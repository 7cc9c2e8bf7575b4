//! Field validation shared by the record constructors and the snapshot importer.
//!
//! Form fields and snapshot entries arrive as loosely typed strings. These
//! helpers turn them into the typed values stored on records and report the
//! offending field by its wire name.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Upper bound for project progress, in percent.
pub const MAX_PROGRESS: u8 = 100;

/// A single field failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    /// Name of the offending field (as it appears in forms and snapshots)
    pub field: &'static str,
    /// Human-readable reason
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for a field.
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Trim a name and reject it if nothing is left.
pub fn require_name(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Check that a cost is empty or a non-negative decimal number.
///
/// The original text is kept on the record; only its shape is checked.
pub fn check_cost(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    match trimmed.parse::<f64>() {
        Ok(cost) if cost.is_finite() && cost >= 0.0 => Ok(()),
        Ok(_) => Err(ValidationError::new(
            field,
            format!("'{}' is not a non-negative amount", trimmed),
        )),
        Err(_) => Err(ValidationError::new(
            field,
            format!("'{}' is not a decimal number", trimmed),
        )),
    }
}

/// Parse a progress percentage. Empty text means no progress yet.
pub fn parse_progress(field: &'static str, value: &str) -> Result<u8, ValidationError> {
    let trimmed = value.trim().trim_end_matches('%');
    if trimmed.is_empty() {
        return Ok(0);
    }
    let percent: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::new(field, format!("'{}' is not a number", value)))?;
    if !(0.0..=f64::from(MAX_PROGRESS)).contains(&percent) {
        return Err(ValidationError::new(
            field,
            format!("{} is outside 0-{}", percent, MAX_PROGRESS),
        ));
    }
    Ok(percent.round() as u8)
}

/// Check a progress value that is already numeric.
pub fn check_progress(field: &'static str, value: u8) -> Result<(), ValidationError> {
    if value > MAX_PROGRESS {
        return Err(ValidationError::new(
            field,
            format!("{} is outside 0-{}", value, MAX_PROGRESS),
        ));
    }
    Ok(())
}

/// Parse a finish date.
///
/// Accepts a plain ISO 8601 date (`2024-05-01`, what date inputs submit) or a
/// full RFC 3339 timestamp (`2024-05-01T00:00:00.000Z`, what browsers write
/// when serializing a date). Empty text means no date.
pub fn parse_finish_date(
    field: &'static str,
    value: &str,
) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| Some(timestamp.with_timezone(&Utc).date_naive()))
        .map_err(|_| ValidationError::new(field, format!("'{}' is not a date", trimmed)))
}
