//! Shift extraction from schedule text.
//!
//! Extraction runs in two passes over the document:
//! 1. [`collect_names`] gathers every worker name that appears on any shift
//!    line, which is the set of legitimate workers.
//! 2. [`extract_matching`] scans top to bottom, tracking the current date and
//!    location from headers, and emits one [`ShiftRecord`] per known name on
//!    every dated shift line.
//!
//! Lines that fail to parse are skipped; they never abort the run.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::classify::{Line, ShiftLine, classify_line, match_shift};
use crate::error::{ScheduleError, ScheduleResult};
use crate::location::{Location, LocationLabels};
use crate::names::{extract_note, normalize_name, split_names};
use crate::record::ShiftRecord;
use crate::time::{ClosingHours, parse_start_time, resolve_end_time, shift_span};

/// Parameters for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Year combined with every DD/MM header.
    pub year: i32,
    /// Closing hours used for `luk` / `??` end times.
    pub closing_hours: ClosingHours,
    /// Labels for the fixed locations.
    pub locations: LocationLabels,
}

impl ExtractOptions {
    /// Creates options for the given year with default hours and labels.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            closing_hours: ClosingHours::default(),
            locations: LocationLabels::default(),
        }
    }

    /// Builder method to set the closing hours.
    pub fn with_closing_hours(mut self, closing_hours: ClosingHours) -> Self {
        self.closing_hours = closing_hours;
        self
    }

    /// Builder method to set the location labels.
    pub fn with_locations(mut self, locations: LocationLabels) -> Self {
        self.locations = locations;
        self
    }
}

/// The result of extracting a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    names: BTreeSet<String>,
    shifts: Vec<ShiftRecord>,
}

impl Schedule {
    /// All normalized worker names found in the document, sorted.
    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    /// All records, in document order.
    pub fn shifts(&self) -> &[ShiftRecord] {
        &self.shifts
    }

    /// Records for one normalized worker, in document order.
    pub fn shifts_for<'a>(&'a self, worker_key: &'a str) -> impl Iterator<Item = &'a ShiftRecord> + 'a {
        self.shifts.iter().filter(move |r| r.is_for(worker_key))
    }

    /// Returns true if the worker appears anywhere in the document.
    pub fn knows(&self, worker_key: &str) -> bool {
        self.names.contains(worker_key)
    }
}

/// Collects the normalized names from every shift line in the document.
///
/// Header state is not consulted; a shift line before the first header still
/// contributes its names.
pub fn collect_names(text: &str) -> BTreeSet<String> {
    text.lines()
        .filter_map(match_shift)
        .flat_map(|shift| split_names(shift.names).map(normalize_name))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Extracts every shift in the document.
pub fn extract_shifts(text: &str, options: &ExtractOptions) -> Schedule {
    let names = collect_names(text);
    let shifts = extract_matching(text, options, &names);
    info!(
        names = names.len(),
        shifts = shifts.len(),
        year = options.year,
        "Extracted shifts"
    );
    Schedule { names, shifts }
}

#[derive(Debug, Default)]
struct ScanState {
    current_date: Option<NaiveDate>,
    current_location: Option<Location>,
}

impl ScanState {
    fn enter_date(&mut self, year: i32, day: u32, month: u32, location: Option<Location>, line_no: usize) {
        self.current_location = location;
        match header_date(year, day, month) {
            Ok(date) => {
                trace!(line = line_no, %date, "Date header");
                self.current_date = Some(date);
            }
            Err(e) => {
                debug!(line = line_no, error = %e, "Skipping header with invalid date");
                self.current_date = None;
            }
        }
    }
}

fn header_date(year: i32, day: u32, month: u32) -> ScheduleResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ScheduleError::InvalidDate { day, month, year })
}

fn shift_times(
    shift: &ShiftLine<'_>,
    date: NaiveDate,
    hours: &ClosingHours,
) -> ScheduleResult<(NaiveDateTime, NaiveDateTime)> {
    let start = parse_start_time(shift.start)?;
    let end = resolve_end_time(shift.end, date, hours)?;
    shift_span(date, start, end)
}

/// Extracts records whose normalized name is in `known`.
///
/// Names outside `known` are dropped even when they parse.
pub fn extract_matching(text: &str, options: &ExtractOptions, known: &BTreeSet<String>) -> Vec<ShiftRecord> {
    let mut state = ScanState::default();
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        match classify_line(line) {
            Line::DateHeader { day, month, location } => {
                state.enter_date(options.year, day, month, Some(location), line_no);
            }
            Line::WeekdayHeader { day, month } => {
                state.enter_date(options.year, day, month, None, line_no);
            }
            Line::Shift(shift) => {
                let Some(date) = state.current_date else {
                    trace!(line = line_no, "Shift line without a date, ignoring");
                    continue;
                };
                let (start, end) = match shift_times(&shift, date, &options.closing_hours) {
                    Ok(span) => span,
                    Err(e) => {
                        debug!(line = line_no, error = %e, "Skipping shift line");
                        continue;
                    }
                };
                let location = state
                    .current_location
                    .clone()
                    .unwrap_or_default()
                    .label(&options.locations);

                for token in split_names(shift.names) {
                    let key = normalize_name(token);
                    if key.is_empty() || !known.contains(&key) {
                        continue;
                    }
                    records.push(
                        ShiftRecord::new(key, start, end, location.clone()).with_note(extract_note(token)),
                    );
                }
            }
            Line::Ignored => {}
        }
    }

    records
}
