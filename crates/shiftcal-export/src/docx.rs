//! Plain-text extraction from `.docx` documents.
//!
//! A `.docx` file is a zip container; the body lives in `word/document.xml`
//! as `w:p` paragraphs made of `w:r` runs holding `w:t` text. Each paragraph
//! becomes one line of output, in document order, including paragraphs
//! inside table cells.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{ExportError, ExportResult};

/// Path of the main document part inside the container.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Reads a `.docx` file and returns its paragraphs joined by newlines.
pub fn read_docx_text(path: &Path) -> ExportResult<String> {
    let file = File::open(path)?;
    let text = read_docx_from(file)?;
    debug!(path = %path.display(), bytes = text.len(), "Read docx text");
    Ok(text)
}

/// Reads `.docx` content from any seekable reader.
pub fn read_docx_from<R: Read + Seek>(reader: R) -> ExportResult<String> {
    let mut archive = ZipArchive::new(reader)?;
    let mut xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(ZipError::FileNotFound) => return Err(ExportError::missing_part(DOCUMENT_PART)),
        Err(e) => return Err(e.into()),
    }
    Ok(paragraphs_from_xml(&xml)?.join("\n"))
}

/// Strips the namespace prefix from an element name (`w:p` → `p`).
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map_or(name, |pos| &name[pos + 1..])
}

/// Extracts the text of every paragraph in a WordprocessingML body.
///
/// Tabs become `\t` and line breaks become `\n`, so a paragraph may itself
/// span several lines.
pub fn paragraphs_from_xml(xml: &str) -> ExportResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    // Open paragraphs; text boxes can nest a paragraph inside another.
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match local_name(e.name().as_ref()) {
                b"p" => open.push(String::new()),
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match local_name(e.name().as_ref()) {
                b"p" => paragraphs.push(String::new()),
                b"tab" => {
                    if let Some(current) = open.last_mut() {
                        current.push('\t');
                    }
                }
                b"br" | b"cr" => {
                    if let Some(current) = open.last_mut() {
                        current.push('\n');
                    }
                }
                _ => {}
            },
            Event::Text(e) => {
                if in_text {
                    if let Some(current) = open.last_mut() {
                        current.push_str(&e.unescape()?);
                    }
                }
            }
            Event::End(e) => match local_name(e.name().as_ref()) {
                b"p" => {
                    if let Some(done) = open.pop() {
                        paragraphs.push(done);
                    }
                }
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
