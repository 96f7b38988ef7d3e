//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - At least one FILE is required; clap reports a usage error (exit 2) otherwise.
//! - Unknown flags are rejected by clap before any file is touched.
//! - --debug is a shorthand for --log-level debug and wins over -v.

use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Rename files to names built only from safe characters.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sanitize file names without overwriting existing files"
)]
pub struct Args {
    /// Files to rename. Directories and other non-regular files are skipped.
    #[arg(
        value_name = "FILE",
        required = true,
        num_args = 1..,
        value_hint = ValueHint::FilePath
    )]
    pub files: Vec<PathBuf>,

    /// Test mode: print `original -> final` for each file, rename nothing.
    #[arg(
        short = 't',
        long = "test",
        visible_alias = "dry-run",
        help = "Only print the planned renames; do not modify files"
    )]
    pub dry_run: bool,

    /// Report skipped files, duplicates and each disambiguation attempt.
    #[arg(short = 'v', long, action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, verbose, debug.
    #[arg(long, value_name = "LEVEL", help = "Set log level: quiet, normal, verbose, debug")]
    pub log_level: Option<LogLevel>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level > -v > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        if let Some(level) = self.log_level {
            return Some(level);
        }
        self.verbose.then_some(LogLevel::Verbose)
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.json {
            cfg.json = true;
        }
    }

    /// Config built from defaults plus these flags.
    pub fn to_config(&self) -> Config {
        let mut cfg = Config::default();
        self.apply_overrides(&mut cfg);
        cfg
    }
}

pub fn parse() -> Args {
    Args::parse()
}
