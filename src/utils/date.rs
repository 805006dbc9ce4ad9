use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};

/// Parse a donation date in "YYYY-MM-DD" form.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse an event booking time in "YYYY-MM-DD HH:MM" form.
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidDateTime(s.to_string()))
}
