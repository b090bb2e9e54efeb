//! iCalendar output for extracted shifts.
//!
//! This module turns [`ShiftRecord`]s into an iCalendar (RFC 5545) payload
//! with one VEVENT per shift of the selected worker. Each event's
//! description lists who else works that day.

use std::collections::HashMap;

use chrono::NaiveDate;
use icalendar::{Calendar, Component, Event, EventLike};
use tracing::{debug, info};

use shiftcal_core::ShiftRecord;

/// Heading in front of the same-day roster.
const ROSTER_HEADING: &str = "Also working:";

/// Groups records by the date their shift starts on.
fn records_by_date(records: &[ShiftRecord]) -> HashMap<NaiveDate, Vec<&ShiftRecord>> {
    let mut by_date: HashMap<NaiveDate, Vec<&ShiftRecord>> = HashMap::new();
    for record in records {
        by_date.entry(record.date()).or_default().push(record);
    }
    by_date
}

/// Builds the description for one shift.
///
/// The first line is the shift's own time range, followed by the duty note
/// if any, then every other worker on `same_day` as `Name: HH:MM–HH:MM`.
/// Records for the same worker are left out of the roster.
pub fn shift_description(record: &ShiftRecord, same_day: &[&ShiftRecord]) -> String {
    let mut lines = vec![record.time_range()];
    if let Some(ref note) = record.note {
        lines.push(format!("Note: {}", note));
    }

    let roster: Vec<String> = same_day
        .iter()
        .filter(|other| other.worker_key != record.worker_key)
        .map(|other| format!("{}: {}", other.display_name(), other.time_range()))
        .collect();
    if !roster.is_empty() {
        lines.push(ROSTER_HEADING.to_string());
        lines.extend(roster);
    }

    lines.join("\n")
}

/// Builds one calendar event for a shift.
fn shift_event(record: &ShiftRecord, title: &str, description: &str) -> Event {
    Event::new()
        .summary(title)
        .starts(record.start)
        .ends(record.end)
        .location(&record.location)
        .description(description)
        .done()
}

/// Builds a calendar with one event per shift of `worker_key`.
///
/// Events keep the order of `records`. A worker with no records yields an
/// empty calendar.
pub fn build_calendar(records: &[ShiftRecord], title: &str, worker_key: &str) -> Calendar {
    let by_date = records_by_date(records);
    let mut calendar = Calendar::new();
    let mut count = 0usize;

    for record in records.iter().filter(|r| r.is_for(worker_key)) {
        let same_day = by_date.get(&record.date()).map(Vec::as_slice).unwrap_or_default();
        let description = shift_description(record, same_day);
        debug!(
            worker = %record.worker_key,
            start = %record.start,
            location = %record.location,
            "Adding shift event"
        );
        calendar.push(shift_event(record, title, &description));
        count += 1;
    }

    info!(worker = worker_key, events = count, "Built calendar");
    calendar
}

/// Serializes the calendar for `worker_key` to iCalendar bytes.
pub fn render_ics(records: &[ShiftRecord], title: &str, worker_key: &str) -> Vec<u8> {
    build_calendar(records, title, worker_key).to_string().into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, NaiveTime};
    use icalendar::{CalendarComponent, CalendarDateTime, DatePerhapsTime};

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    fn records() -> Vec<ShiftRecord> {
        vec![
            ShiftRecord::new("jane doe", at(4, 13, 30), at(4, 22, 0), "Kælderen")
                .with_note(Some("opvask".to_string())),
            ShiftRecord::new("john smith", at(4, 13, 30), at(4, 22, 0), "Kælderen"),
            ShiftRecord::new("lis", at(4, 18, 0), at(5, 2, 0), "Kælderen"),
            ShiftRecord::new("jane doe", at(4, 23, 0), at(5, 1, 0), "Kælderen"),
            ShiftRecord::new("john smith", at(5, 10, 0), at(5, 14, 0), "Kælderen"),
            ShiftRecord::new("jane doe", at(3, 10, 0), at(3, 14, 0), "Moments"),
        ]
    }

    fn parsed_events(ics: &[u8]) -> Vec<Event> {
        let text = String::from_utf8(ics.to_vec()).unwrap();
        let calendar: Calendar = text.parse().unwrap();
        calendar
            .iter()
            .filter_map(|component| match component {
                CalendarComponent::Event(event) => Some(event.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn description_lists_other_workers_same_day() {
        let records = records();
        let by_date = records_by_date(&records);
        let same_day = &by_date[&records[0].date()];

        insta::assert_snapshot!(shift_description(&records[0], same_day), @r"
        13:30–22:00
        Note: opvask
        Also working:
        John Smith: 13:30–22:00
        Lis: 18:00–02:00
        ");
    }

    #[test]
    fn description_without_colleagues() {
        let records = records();
        let description = shift_description(&records[5], &[&records[5]]);
        assert_eq!(description, "10:00–14:00");
    }

    #[test]
    fn one_event_per_worker_shift_in_record_order() {
        let records = records();
        let events = parsed_events(&render_ics(&records, "🤓 - Arbejde", "jane doe"));

        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.get_summary() == Some("🤓 - Arbejde")));

        let starts: Vec<NaiveDateTime> = events
            .iter()
            .map(|e| match e.get_start() {
                Some(DatePerhapsTime::DateTime(CalendarDateTime::Floating(dt))) => dt,
                other => panic!("unexpected start {other:?}"),
            })
            .collect();
        assert_eq!(starts, vec![at(4, 13, 30), at(4, 23, 0), at(3, 10, 0)]);

        match events[1].get_end() {
            Some(DatePerhapsTime::DateTime(CalendarDateTime::Floating(dt))) => assert_eq!(dt, at(5, 1, 0)),
            other => panic!("unexpected end {other:?}"),
        }
        assert_eq!(events[2].get_location(), Some("Moments"));
        assert!(events[0].get_description().unwrap().contains("13:30–22:00"));
    }

    #[test]
    fn unknown_worker_gives_empty_calendar() {
        let records = records();
        let calendar = build_calendar(&records, "Arbejde", "nobody");
        assert_eq!(calendar.iter().count(), 0);
        assert!(calendar.to_string().contains("BEGIN:VCALENDAR"));
    }
}
