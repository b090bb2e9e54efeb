//! Time types for shift lines.
//!
//! This module provides [`normalize_time`] for turning free-form time tokens
//! (`13.30`, `9`, `luk`) into canonical clock times, [`ClosingHours`] for the
//! per-weekday closing table, and [`resolve_end_time`] for turning an
//! open-ended shift ("until close") into a concrete end time.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Keyword used in schedules for "until closing time".
pub const CLOSED_KEYWORD: &str = "luk";

/// Placeholder used in schedules when the end time is not known yet.
pub const UNKNOWN_PLACEHOLDER: &str = "??";

/// Closing hours below this value belong to the early-morning band.
const EARLY_MORNING_CUTOFF: u32 = 6;

/// Fixed representation of an after-midnight closing.
const EARLY_MORNING_CLOSE: (u32, u32) = (2, 0);

/// A normalized time token.
///
/// Displays as zero-padded `HH:MM`, or as the closed keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftTime {
    /// A concrete clock time.
    At(NaiveTime),
    /// The "until close" sentinel.
    Closed,
}

impl fmt::Display for ShiftTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(t) => write!(f, "{:02}:{:02}", t.hour(), t.minute()),
            Self::Closed => f.write_str(CLOSED_KEYWORD),
        }
    }
}

/// Normalizes a free-form time token.
///
/// `13.30` and `13:30` become `13:30`, a bare hour `9` becomes `09:00`, and
/// the closed keyword (any case) is returned as [`ShiftTime::Closed`].
///
/// # Errors
///
/// Returns [`ScheduleError::TimeFormat`] carrying the original and the
/// normalized token when the token cannot be parsed or is out of range.
pub fn normalize_time(raw: &str) -> ScheduleResult<ShiftTime> {
    let mut s = raw.trim().to_lowercase().replace('.', ":");
    if s == CLOSED_KEYWORD {
        return Ok(ShiftTime::Closed);
    }
    if !s.contains(':') {
        s.push_str(":00");
    }

    let parsed = s
        .split_once(':')
        .and_then(|(h, m)| Some((h.parse::<u32>().ok()?, m.parse::<u32>().ok()?)))
        .filter(|&(h, m)| h < 24 && m < 60)
        .and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0));

    parsed
        .map(ShiftTime::At)
        .ok_or_else(|| ScheduleError::time_format(raw, s))
}

/// Normalizes a shift start time, which must be a concrete clock time.
pub fn parse_start_time(raw: &str) -> ScheduleResult<NaiveTime> {
    match normalize_time(raw)? {
        ShiftTime::At(t) => Ok(t),
        ShiftTime::Closed => Err(ScheduleError::time_format(raw, CLOSED_KEYWORD)),
    }
}

/// Per-weekday normal closing hour, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct ClosingHours([u32; 7]);

impl Default for ClosingHours {
    fn default() -> Self {
        Self([22, 22, 23, 23, 2, 2, 22])
    }
}

impl ClosingHours {
    /// Creates a table from seven Monday-first hours.
    ///
    /// # Errors
    ///
    /// Returns an error if any hour is not in `0..=23`.
    pub fn new(hours: [u32; 7]) -> ScheduleResult<Self> {
        if let Some((weekday, &hour)) = hours.iter().enumerate().find(|(_, h)| **h > 23) {
            return Err(ScheduleError::ClosingHourOutOfRange { weekday, hour });
        }
        Ok(Self(hours))
    }

    /// Returns the closing hour that applies on the given date.
    pub fn hour_for(&self, date: NaiveDate) -> u32 {
        self.0[date.weekday().num_days_from_monday() as usize]
    }

    /// Returns the hours as a Monday-first array.
    pub fn as_array(&self) -> [u32; 7] {
        self.0
    }
}

impl TryFrom<Vec<u32>> for ClosingHours {
    type Error = ScheduleError;

    fn try_from(hours: Vec<u32>) -> Result<Self, Self::Error> {
        let hours: [u32; 7] = hours
            .try_into()
            .map_err(|v: Vec<u32>| ScheduleError::ClosingHoursLength(v.len()))?;
        Self::new(hours)
    }
}

impl From<ClosingHours> for Vec<u32> {
    fn from(hours: ClosingHours) -> Self {
        hours.0.to_vec()
    }
}

/// Returns true if the token means "until close" or "not known yet".
pub fn is_open_ended(raw: &str) -> bool {
    let s = raw.trim().to_lowercase();
    s == CLOSED_KEYWORD || s == UNKNOWN_PLACEHOLDER
}

/// Returns the closing time that applies on the given date.
///
/// Early-morning closing hours are all reported as 02:00.
pub fn closing_time(date: NaiveDate, hours: &ClosingHours) -> NaiveTime {
    let hour = hours.hour_for(date);
    let (h, m) = if hour < EARLY_MORNING_CUTOFF {
        EARLY_MORNING_CLOSE
    } else {
        (hour, 0)
    };
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

/// Resolves a raw end-time token for a shift on `date`.
///
/// The closed keyword and the unknown placeholder resolve to that weekday's
/// closing time; anything else goes through [`normalize_time`].
pub fn resolve_end_time(raw: &str, date: NaiveDate, hours: &ClosingHours) -> ScheduleResult<NaiveTime> {
    if is_open_ended(raw) {
        return Ok(closing_time(date, hours));
    }
    match normalize_time(raw)? {
        ShiftTime::At(t) => Ok(t),
        ShiftTime::Closed => Ok(closing_time(date, hours)),
    }
}

/// Combines a date with start and end clock times.
///
/// When the end is not strictly after the start on the same day, the shift
/// crosses midnight and the end moves to the next calendar day.
///
/// # Errors
///
/// Returns an error if the next day is past the last representable date.
pub fn shift_span(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> ScheduleResult<(NaiveDateTime, NaiveDateTime)> {
    let start = date.and_time(start);
    let mut end = date.and_time(end);
    if end <= start {
        end = end
            .checked_add_signed(Duration::days(1))
            .ok_or(ScheduleError::DateOutOfRange { date })?;
    }
    Ok((start, end))
}

/// Formats a clock time as `HH:MM`.
pub fn format_clock(t: NaiveTime) -> String {
    ShiftTime::At(t).to_string()
}
