//! Parsing of command-line field values

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, TransactionType};

pub fn parse_amount(value: &str) -> TrackerResult<Money> {
    Money::parse(value).map_err(|e| {
        TrackerError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '42.50'. ({})",
            value, e
        ))
    })
}

pub fn parse_date(value: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", value))
    })
}

pub fn parse_type(value: &str) -> TrackerResult<TransactionType> {
    value.parse()
}

pub fn parse_optional_date(value: Option<&str>) -> TrackerResult<Option<NaiveDate>> {
    value.map(parse_date).transpose()
}
