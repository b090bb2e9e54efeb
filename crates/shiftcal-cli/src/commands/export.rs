//! `shiftcal export`: write one worker's shifts as an `.ics` file.

use std::path::{Path, PathBuf};

use tracing::info;

use shiftcal_core::{Schedule, extract_shifts, normalize_name};
use shiftcal_export::render_ics;

use crate::config::ClientConfig;
use crate::document::load_document;
use crate::error::ClientResult;

/// What an export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The calendar was written with this many events.
    Written { path: PathBuf, events: usize },
    /// The worker had no dated shifts; nothing was written.
    NoShifts { worker_key: String },
}

/// Writes the calendar for `worker` from an extracted schedule.
pub fn export_schedule(
    schedule: &Schedule,
    worker: &str,
    title: &str,
    output: &Path,
) -> ClientResult<ExportOutcome> {
    let worker_key = normalize_name(worker);
    let events = schedule.shifts_for(&worker_key).count();
    if events == 0 {
        return Ok(ExportOutcome::NoShifts { worker_key });
    }

    let ics = render_ics(schedule.shifts(), title, &worker_key);
    std::fs::write(output, ics)?;
    info!(worker = %worker_key, events, path = %output.display(), "Wrote calendar");

    Ok(ExportOutcome::Written {
        path: output.to_path_buf(),
        events,
    })
}

/// Exports the shifts of one worker in `file`.
pub fn run(
    file: &Path,
    worker: &str,
    title: Option<&str>,
    output: Option<&Path>,
    config: &ClientConfig,
) -> ClientResult<()> {
    let text = load_document(file)?;
    let schedule = extract_shifts(&text, &config.extract_options());

    let title = title.unwrap_or(&config.title);
    let output = output.unwrap_or(&config.output);

    match export_schedule(&schedule, worker, title, output)? {
        ExportOutcome::Written { path, events } => {
            println!("Wrote {} shift(s) to {}", events, path.display());
        }
        ExportOutcome::NoShifts { worker_key } => {
            if schedule.knows(&worker_key) {
                eprintln!("No dated shifts found for '{}'", worker);
            } else {
                eprintln!("No shifts found for '{}'; run `shiftcal names` to list workers", worker);
            }
        }
    }
    Ok(())
}
