//! Error types for schedule parsing.
//!
//! Every error here is local to a single line of the schedule document or to
//! a single configuration value. The extractor catches line-level errors and
//! skips the offending line; none of them abort a whole extraction run.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors that can occur while parsing schedule text or its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A time token could not be parsed, or its hour/minute is out of range.
    #[error("invalid time format: '{raw}' (after normalization: '{normalized}')")]
    TimeFormat { raw: String, normalized: String },

    /// A DD/MM header does not name a real calendar day in the given year.
    #[error("invalid date: {day:02}/{month:02}/{year}")]
    InvalidDate { day: u32, month: u32, year: i32 },

    /// The closing-hours table does not have one entry per weekday.
    #[error("closing hours must have 7 entries (Monday first), got {0}")]
    ClosingHoursLength(usize),

    /// An overnight shift would end past the last representable date.
    #[error("shift on {date} ends past the last representable date")]
    DateOutOfRange { date: NaiveDate },

    /// A closing hour is not a valid hour of the day.
    #[error("closing hour {hour} for weekday {weekday} is out of range (0-23)")]
    ClosingHourOutOfRange { weekday: usize, hour: u32 },
}

impl ScheduleError {
    /// Creates a time format error.
    pub fn time_format(raw: impl Into<String>, normalized: impl Into<String>) -> Self {
        Self::TimeFormat {
            raw: raw.into(),
            normalized: normalized.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_format_display_carries_both_tokens() {
        let err = ScheduleError::time_format("25.00", "25:00");
        let display = err.to_string();
        assert!(display.contains("'25.00'"));
        assert!(display.contains("'25:00'"));
    }

    #[test]
    fn invalid_date_display() {
        let err = ScheduleError::InvalidDate {
            day: 31,
            month: 2,
            year: 2025,
        };
        assert_eq!(err.to_string(), "invalid date: 31/02/2025");
    }

    #[test]
    fn date_out_of_range_display() {
        let err = ScheduleError::DateOutOfRange {
            date: NaiveDate::MAX,
        };
        assert!(err.to_string().ends_with("ends past the last representable date"));
    }
}
