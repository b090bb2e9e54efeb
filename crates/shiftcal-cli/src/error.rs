//! Client error types.

use std::fmt;

use shiftcal_core::ScheduleError;
use shiftcal_export::ExportError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// IO error.
    Io(std::io::Error),
    /// The schedule document could not be read.
    Document(ExportError),
    /// Output could not be serialized.
    Serialize(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Document(err) => write!(f, "could not read schedule: {}", err),
            Self::Serialize(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Document(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ExportError> for ClientError {
    fn from(err: ExportError) -> Self {
        Self::Document(err)
    }
}

impl From<ScheduleError> for ClientError {
    fn from(err: ScheduleError) -> Self {
        Self::Config(err.to_string())
    }
}
