//! Error types for reading schedule documents.

use std::io;

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while reading a document or writing a calendar.
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error (file open, read, write).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a readable zip container.
    #[error("invalid .docx container: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The document XML is malformed.
    #[error("invalid document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A required part is missing from the container.
    #[error("document part not found: {0}")]
    MissingPart(String),
}

impl ExportError {
    /// Creates a missing part error.
    pub fn missing_part(part: impl Into<String>) -> Self {
        Self::MissingPart(part.into())
    }
}
