//! End-to-end: schedule text → shift records → iCalendar → parsed back.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use icalendar::{Calendar, CalendarComponent, CalendarDateTime, Component, DatePerhapsTime, Event, EventLike};

use shiftcal_core::{ExtractOptions, extract_shifts, normalize_name};
use shiftcal_export::render_ics;

const SCHEDULE: &str = "\
Vagtplan uge 14
9-17: Nobody Dated

Tirsdag d. 1/4
13.30-luk: Jane Doe, John Smith
17-luk  Lis

Fredag d.4/4
22-02: Jane Doe (opvask)
18-??: John Smith og Lis

Moments - firmafest 40 pers: 5/4
17-23: Jane Doe";

fn at(m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, m, d)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap())
}

fn events(ics: &[u8]) -> Vec<Event> {
    let calendar: Calendar = String::from_utf8(ics.to_vec()).unwrap().parse().unwrap();
    calendar
        .iter()
        .filter_map(|component| match component {
            CalendarComponent::Event(event) => Some(event.clone()),
            _ => None,
        })
        .collect()
}

fn floating(time: Option<DatePerhapsTime>) -> NaiveDateTime {
    match time {
        Some(DatePerhapsTime::DateTime(CalendarDateTime::Floating(dt))) => dt,
        other => panic!("expected floating datetime, got {other:?}"),
    }
}

#[test]
fn worker_calendar_from_schedule_text() {
    let schedule = extract_shifts(SCHEDULE, &ExtractOptions::new(2025));
    let worker = normalize_name("JANE  DOE");

    let names: Vec<&str> = schedule.names().iter().map(String::as_str).collect();
    assert_eq!(names, vec!["jane doe", "john smith", "lis", "nobody dated"]);
    assert_eq!(schedule.shifts().len(), 7);

    let events = events(&render_ics(schedule.shifts(), "Arbejde", &worker));
    assert_eq!(events.len(), 3);

    assert_eq!(floating(events[0].get_start()), at(4, 1, 13, 30));
    assert_eq!(floating(events[0].get_end()), at(4, 1, 22, 0));

    // Friday closes at 02, so the shift crosses midnight.
    assert_eq!(floating(events[1].get_start()), at(4, 4, 22, 0));
    assert_eq!(floating(events[1].get_end()), at(4, 5, 2, 0));

    assert_eq!(floating(events[2].get_start()), at(4, 5, 17, 0));
    assert_eq!(floating(events[2].get_end()), at(4, 5, 23, 0));

    let friday = events[1].get_description().unwrap();
    assert!(friday.contains("opvask"));
    assert!(friday.contains("John Smith"));
    assert!(friday.contains("Lis"));
}

#[test]
fn undated_worker_has_no_events() {
    let schedule = extract_shifts(SCHEDULE, &ExtractOptions::new(2025));
    assert!(schedule.knows("nobody dated"));
    assert_eq!(schedule.shifts_for("nobody dated").count(), 0);

    let events = events(&render_ics(schedule.shifts(), "Arbejde", "nobody dated"));
    assert!(events.is_empty());
}
