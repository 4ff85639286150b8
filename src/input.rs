//! Parsers for raw console lines.  Each one returns a validated value or an `InputError` that the
//! text interface turns into a retry prompt.

use std::str::FromStr;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("expected a whole number, got \"{0}\"")]
    NotANumber(String),
    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),
    #[error("salary must be a non-negative number, got \"{0}\"")]
    InvalidSalary(String),
    #[error("please enter a number between 0 and {max}")]
    OutOfRange { max: usize },
}

/// Parse a strictly positive integer, used for ids and ages on new records.
pub fn parse_positive(line: &str, field: &'static str) -> Result<u32> {
    match parse_unsigned(line, field)? {
        0 => Err(InputError::NotPositive(field)),
        value => Ok(value),
    }
}

/// Parse an id used to look up an existing record.  Zero is accepted here; the store simply won't
/// find it.
pub fn parse_id(line: &str) -> Result<u32> {
    parse_unsigned(line, "id")
}

fn parse_unsigned(line: &str, field: &'static str) -> Result<u32> {
    let trimmed = line.trim();
    if trimmed.starts_with('-') && i64::from_str(trimmed).is_ok() {
        return Err(InputError::NotPositive(field));
    }

    u32::from_str(trimmed).map_err(|_| InputError::NotANumber(String::from(trimmed)))
}

pub fn parse_salary(line: &str) -> Result<f64> {
    let trimmed = line.trim();

    match f64::from_str(trimmed) {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(InputError::InvalidSalary(String::from(trimmed))),
    }
}

/// Parse how many records to add in one batch, bounded by the free slots in the store.
pub fn parse_count(line: &str, max: usize) -> Result<usize> {
    let trimmed = line.trim();
    let count = usize::from_str(trimmed).map_err(|_| InputError::OutOfRange { max })?;

    if count > max {
        return Err(InputError::OutOfRange { max });
    }

    Ok(count)
}

pub fn parse_text(line: &str) -> String {
    String::from(line.trim())
}
