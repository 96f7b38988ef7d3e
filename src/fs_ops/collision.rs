//! Duplicate-name resolution.
//!
//! Policy:
//! - A free candidate is used as-is.
//! - Otherwise append `_n` before the extension for n = 1, 2, ... and take the
//!   first free name.
//! - Once n reaches [`MAX_DISAMBIGUATOR`] the file fails with `ExhaustedRetries`
//!   instead of searching forever or overwriting.
//!
//! Notes:
//! - "Free" is decided by a [`NameLookup`]. Real runs ask the filesystem; dry
//!   runs layer the names planned so far on top of it.
//! - Check-then-rename is not atomic; the tool assumes nobody else is writing
//!   to the directory during a run.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::errors::FnCleanError;
use crate::naming::SanitizedPath;

/// Exclusive upper bound for the numeric suffix: `_1` through `_254` are tried.
pub const MAX_DISAMBIGUATOR: u32 = 255;

/// Answers "is this name taken?".
pub trait NameLookup {
    fn exists(&self, path: &Path) -> bool;
}

/// Lookup backed by the filesystem. Dangling symlinks count as taken.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsView;

impl NameLookup for FsView {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }
}

/// Filesystem view plus the renames planned earlier in a dry run.
#[derive(Debug, Default)]
pub struct PlannedView {
    taken: HashSet<PathBuf>,
    freed: HashSet<PathBuf>,
}

impl PlannedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a planned rename so later lookups see its effect.
    pub fn record(&mut self, from: &Path, to: &Path) {
        let from = normalize(from);
        let to = normalize(to);
        self.taken.remove(&from);
        self.freed.insert(from);
        self.freed.remove(&to);
        self.taken.insert(to);
    }

    /// Whether a planned rename has already moved `path` away.
    pub fn is_freed(&self, path: &Path) -> bool {
        let key = normalize(path);
        self.freed.contains(&key) && !self.taken.contains(&key)
    }
}

impl NameLookup for PlannedView {
    fn exists(&self, path: &Path) -> bool {
        let key = normalize(path);
        if self.taken.contains(&key) {
            return true;
        }
        if self.freed.contains(&key) {
            return false;
        }
        FsView.exists(path)
    }
}

/// Drop `.` components so `./a` and `a` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Picks a free final path for a sanitized candidate.
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver {
    limit: u32,
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self {
            limit: MAX_DISAMBIGUATOR,
        }
    }
}

impl CollisionResolver {
    /// Resolver with a custom exclusive suffix bound (minimum 1).
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
        }
    }

    pub fn resolve(
        &self,
        name: &SanitizedPath,
        view: &dyn NameLookup,
    ) -> Result<PathBuf, FnCleanError> {
        if !view.exists(&name.candidate) {
            return Ok(name.candidate.clone());
        }
        debug!(candidate = %name.candidate.display(), "duplicate name detected");

        for n in 1..self.limit {
            let attempt = name.with_disambiguator(n);
            debug!(attempt = n, path = %attempt.display(), "trying disambiguator");
            if !view.exists(&attempt) {
                return Ok(attempt);
            }
        }

        Err(FnCleanError::ExhaustedRetries {
            candidate: name.candidate.clone(),
            attempts: self.limit - 1,
        })
    }
}
