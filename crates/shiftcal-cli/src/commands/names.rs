//! `shiftcal names`: list the workers in a schedule.

use std::collections::BTreeSet;
use std::path::Path;

use shiftcal_core::{collect_names, display_name};

use crate::document::load_document;
use crate::error::ClientResult;

/// Renders worker names for display, one per line, sorted.
pub fn render_names(names: &BTreeSet<String>) -> String {
    let mut shown: Vec<String> = names.iter().map(|key| display_name(key)).collect();
    shown.sort();
    shown.join("\n")
}

/// Prints every worker named in the schedule.
pub fn run(file: &Path) -> ClientResult<()> {
    let text = load_document(file)?;
    let names = collect_names(&text);
    if names.is_empty() {
        eprintln!("No workers found in {}", file.display());
        return Ok(());
    }
    println!("{}", render_names(&names));
    Ok(())
}
