//! Typed error definitions for fn_clean.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FnCleanError {
    #[error("Not a regular file ({reason}): {path}")]
    NotAFile { path: PathBuf, reason: &'static str },

    #[error("too many duplicates for {candidate} (tried {attempts} suffixes)")]
    ExhaustedRetries { candidate: PathBuf, attempts: u32 },

    #[error("Rename '{from}' -> '{to}' failed: {source}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl FnCleanError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            FnCleanError::NotAFile { .. } => 10,
            FnCleanError::ExhaustedRetries { .. } => 20,
            FnCleanError::RenameFailed { .. } => 30,
            FnCleanError::Interrupted => 130,
        }
    }

    /// Short machine-friendly tag.
    pub fn kind(&self) -> &'static str {
        match self {
            FnCleanError::NotAFile { .. } => "not_a_file",
            FnCleanError::ExhaustedRetries { .. } => "exhausted_retries",
            FnCleanError::RenameFailed { .. } => "rename_failed",
            FnCleanError::Interrupted => "interrupted",
        }
    }
}
