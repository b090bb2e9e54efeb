//! Line classification for schedule documents.
//!
//! Each line is one of: a date header with a location phrase
//! (`Moments - firmafest: 12/4`), a plain date header (`Albert Rex: 3/5`),
//! a weekday header (`Mandag d. 1/4`), a shift line
//! (`13.30-luk: Jane Doe, John Smith`), or something to ignore. Patterns are
//! tried in that order and the first match wins.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::location::{Location, resolve_location};

/// `<phrase> - <anything>: DD/MM`
static LOCATED_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<phrase>.+?)\s+[-–—|]\s+.*?:\s*(?P<day>\d{1,2})/(?P<month>\d{1,2})")
        .expect("Invalid located header regex")
});

/// `<prefix>: DD/MM`
static DATE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix>.+?):\s*(?P<day>\d{1,2})/(?P<month>\d{1,2})")
        .expect("Invalid date header regex")
});

/// `<weekday> d. DD/MM`, anywhere in the line.
static WEEKDAY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\p{L}+[.,]?\s*\bd\.?\s*(?P<day>\d{1,2})/(?P<month>\d{1,2})\b")
        .expect("Invalid weekday header regex")
});

/// `<start>-<end>: <names>` where the separator before the names is a colon
/// or at least two spaces.
static SHIFT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<start>\d{1,2}(?:[:.]\d{2})?)[\s\-–—]+(?P<end>\d{1,2}(?:[:.]\d{2})?|luk|\?\?)\s*(?::\s*|\s{2,})(?P<names>.+)$",
    )
    .expect("Invalid shift line regex")
});

/// The raw parts of a shift line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftLine<'a> {
    /// Raw start time token.
    pub start: &'a str,
    /// Raw end time token, possibly `luk` or `??`.
    pub end: &'a str,
    /// Everything after the separator.
    pub names: &'a str,
}

/// A classified document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// A date header that names a location.
    DateHeader {
        day: u32,
        month: u32,
        location: Location,
    },
    /// A weekday header; shifts under it use the default location.
    WeekdayHeader { day: u32, month: u32 },
    /// A shift line.
    Shift(ShiftLine<'a>),
    /// Blank or unrecognised text.
    Ignored,
}

fn day_month(caps: &Captures<'_>) -> Option<(u32, u32)> {
    let day = caps.name("day")?.as_str().parse().ok()?;
    let month = caps.name("month")?.as_str().parse().ok()?;
    Some((day, month))
}

fn header(caps: &Captures<'_>, phrase: &str) -> Option<Line<'static>> {
    let (day, month) = day_month(caps)?;
    let phrase = caps.name(phrase)?.as_str();
    Some(Line::DateHeader {
        day,
        month,
        location: resolve_location(phrase),
    })
}

/// Matches a shift line, independent of any header state.
pub fn match_shift(line: &str) -> Option<ShiftLine<'_>> {
    let caps = SHIFT_LINE.captures(line.trim())?;
    Some(ShiftLine {
        start: caps.name("start")?.as_str(),
        end: caps.name("end")?.as_str(),
        names: caps.name("names")?.as_str(),
    })
}

/// Classifies a single line of the schedule.
pub fn classify_line(line: &str) -> Line<'_> {
    let raw = line.trim();
    if raw.is_empty() {
        return Line::Ignored;
    }

    if let Some(found) = LOCATED_HEADER.captures(raw).and_then(|c| header(&c, "phrase")) {
        return found;
    }
    if let Some(found) = DATE_HEADER.captures(raw).and_then(|c| header(&c, "prefix")) {
        return found;
    }
    if let Some((day, month)) = WEEKDAY_HEADER.captures(raw).as_ref().and_then(day_month) {
        return Line::WeekdayHeader { day, month };
    }
    match match_shift(raw) {
        Some(shift) => Line::Shift(shift),
        None => Line::Ignored,
    }
}
