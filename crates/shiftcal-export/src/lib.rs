//! Document input and calendar output for shift schedules.
//!
//! - [`docx`] reads the paragraphs of a `.docx` schedule as plain text.
//! - [`ics`] turns extracted [`shiftcal_core::ShiftRecord`]s into an
//!   iCalendar payload.

pub mod docx;
pub mod error;
pub mod ics;

pub use docx::{read_docx_from, read_docx_text};
pub use error::{ExportError, ExportResult};
pub use ics::{build_calendar, render_ics, shift_description};
