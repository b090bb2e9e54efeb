//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use shiftcal_core::TracingOutputFormat;

/// shiftcal - Turn a work schedule into calendar events
#[derive(Debug, Parser)]
#[command(name = "shiftcal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "SHIFTCAL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output (shows skipped lines)
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    /// Log output format
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    // --- Schedule options ---
    /// Year for the DD/MM dates in the schedule
    #[arg(long, global = true)]
    pub year: Option<i32>,

    /// Closing hour per weekday, Monday first (e.g. 22,22,23,23,2,2,22)
    #[arg(long, value_delimiter = ',', global = true)]
    pub closing_hours: Option<Vec<u32>>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormat> for TracingOutputFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
            LogFormat::Json => Self::Json,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the workers found in a schedule
    Names {
        /// Schedule document (.docx or plain text)
        file: PathBuf,
    },

    /// Print the shifts found in a schedule
    Shifts {
        /// Schedule document (.docx or plain text)
        file: PathBuf,

        /// Only show shifts for this worker
        #[arg(long, short)]
        worker: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Write an .ics calendar with one worker's shifts
    Export {
        /// Schedule document (.docx or plain text)
        file: PathBuf,

        /// Worker name, as written in the schedule
        #[arg(long, short)]
        worker: String,

        /// Title for every calendar event
        #[arg(long, short)]
        title: Option<String>,

        /// Where to write the .ics file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
