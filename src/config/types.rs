//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Renames and failures (default)
    #[default]
    Normal,
    /// Also skipped files, duplicates and each disambiguation attempt (`-v`)
    Verbose,
    /// Everything, including per-character decoding details
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "info" => Some(LogLevel::Normal),
            "verbose" | "detailed" => Some(LogLevel::Verbose),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Print `original -> final` for each file but rename nothing
    pub dry_run: bool,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Emit logs as JSON lines
    pub json: bool,
}

impl Config {
    pub fn is_verbose(&self) -> bool {
        matches!(self.log_level, LogLevel::Verbose | LogLevel::Debug)
    }
}
