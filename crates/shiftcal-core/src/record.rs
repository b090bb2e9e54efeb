//! Shift records produced by extraction.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::names::display_name;
use crate::time::format_clock;

/// One worker on one shift line.
///
/// `end` is always strictly after `start`; overnight shifts end on the
/// following calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Normalized worker name.
    pub worker_key: String,
    /// When the shift starts (local time).
    pub start: NaiveDateTime,
    /// When the shift ends (local time).
    pub end: NaiveDateTime,
    /// Duty annotation from the name token, lowercased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Location label.
    pub location: String,
}

impl ShiftRecord {
    /// Creates a record without a note.
    pub fn new(
        worker_key: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            worker_key: worker_key.into(),
            start,
            end,
            note: None,
            location: location.into(),
        }
    }

    /// Builder method to set the duty note.
    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// The calendar date the shift starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// The shift as `HH:MM–HH:MM`.
    pub fn time_range(&self) -> String {
        format!("{}–{}", format_clock(self.start.time()), format_clock(self.end.time()))
    }

    /// The worker name for display.
    pub fn display_name(&self) -> String {
        display_name(&self.worker_key)
    }

    /// Returns true if this record belongs to the given normalized worker.
    pub fn is_for(&self, worker_key: &str) -> bool {
        self.worker_key == worker_key
    }
}
