//! `shiftcal shifts`: print the shifts found in a schedule.

use std::path::Path;

use shiftcal_core::{ShiftRecord, extract_shifts, normalize_name};

use crate::config::ClientConfig;
use crate::document::load_document;
use crate::error::{ClientError, ClientResult};

/// Renders shifts as aligned text, one per line.
pub fn render_table(records: &[&ShiftRecord]) -> String {
    let width = records
        .iter()
        .map(|r| r.display_name().chars().count())
        .max()
        .unwrap_or(0);

    records
        .iter()
        .map(|r| {
            let mut line = format!(
                "{} {}  {:<width$}  {}",
                r.start.format("%a %d/%m"),
                r.time_range(),
                r.display_name(),
                r.location,
            );
            if let Some(ref note) = r.note {
                line.push_str(&format!(" ({})", note));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders shifts as a JSON array.
pub fn render_json(records: &[&ShiftRecord]) -> ClientResult<String> {
    serde_json::to_string_pretty(records).map_err(|e| ClientError::Serialize(e.to_string()))
}

/// Prints the shifts in the schedule, optionally for one worker.
pub fn run(file: &Path, worker: Option<&str>, json: bool, config: &ClientConfig) -> ClientResult<()> {
    let text = load_document(file)?;
    let schedule = extract_shifts(&text, &config.extract_options());

    let key = worker.map(normalize_name);
    let records: Vec<&ShiftRecord> = match key {
        Some(ref key) => schedule.shifts_for(key).collect(),
        None => schedule.shifts().iter().collect(),
    };

    if json {
        println!("{}", render_json(&records)?);
    } else if records.is_empty() {
        eprintln!("No shifts found");
    } else {
        println!("{}", render_table(&records));
    }
    Ok(())
}
