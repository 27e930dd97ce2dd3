//! Command-line configuration for the terminal app.
//!
//! Prices and the debounce interval are compiled in; only presentation and
//! logging concerns are configurable.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Parser)]
#[command(name = "imagecost")]
#[command(version, about = "Estimate the dollar cost of OpenAI image generation token usage")]
pub struct AppConfig {
    /// Where log records go.
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log_destination: LogDestination,

    /// Minimum level that gets logged.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log file used by the `file` and `both` destinations.
    #[arg(long, default_value = "imagecost.log")]
    pub log_file: PathBuf,

    /// Usage snippet to load on startup, as copied from the Playground.
    #[arg(long)]
    pub snippet: Option<String>,
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Write to the log file.
    File,
    /// Write to the terminal (stderr).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
