//! Core pipeline: turns schedule text into shift records.
//!
//! The entry point is [`extract_shifts`], which scans a document once for
//! worker names and once for dated shift lines, returning a [`Schedule`].

pub mod classify;
pub mod error;
pub mod extract;
pub mod location;
pub mod names;
pub mod record;
pub mod time;
pub mod tracing;

pub use classify::{Line, ShiftLine, classify_line, match_shift};
pub use error::{ScheduleError, ScheduleResult};
pub use extract::{ExtractOptions, Schedule, collect_names, extract_matching, extract_shifts};
pub use location::{FixedLocation, Location, LocationLabels, resolve_location};
pub use names::{display_name, extract_note, normalize_name};
pub use record::ShiftRecord;
pub use time::{ClosingHours, ShiftTime, normalize_time, resolve_end_time};
pub use crate::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
