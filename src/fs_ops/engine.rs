//! Batch driver: stat, sanitize, resolve collisions, rename.
//! Files are processed strictly in the order given, one at a time.
//! A failure on one file never stops the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::errors::FnCleanError;
use crate::naming::NameSanitizer;
use crate::shutdown;

use super::atomic::rename_no_clobber;
use super::collision::{CollisionResolver, PlannedView};
use super::helpers::{describe, hint_for};

/// What happened to one input path.
#[derive(Debug)]
pub enum Outcome {
    /// File was renamed.
    Renamed { from: PathBuf, to: PathBuf },
    /// Dry run: file would be renamed.
    Planned { from: PathBuf, to: PathBuf },
    /// Name was already clean; nothing to do.
    Unchanged(PathBuf),
    /// Not a regular file (or already moved earlier in the run); skipped.
    Skipped { path: PathBuf, reason: FnCleanError },
    /// Processing this file failed; the batch went on.
    Failed { path: PathBuf, error: FnCleanError },
}

impl Outcome {
    /// `original -> final` line for renamed or planned files.
    pub fn mapping_line(&self) -> Option<String> {
        match self {
            Outcome::Renamed { from, to } | Outcome::Planned { from, to } => {
                Some(format!("{} -> {}", from.display(), to.display()))
            }
            _ => None,
        }
    }
}

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
    /// Set when a shutdown request stopped the batch early.
    pub interrupted: bool,
}

impl BatchReport {
    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Failed { .. }))
            .count()
    }

    pub fn renamed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Renamed { .. } | Outcome::Planned { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Skipped { .. }))
            .count()
    }

    pub fn is_success(&self) -> bool {
        !self.interrupted && self.failures() == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenameEngine {
    sanitizer: NameSanitizer,
    resolver: CollisionResolver,
    dry_run: bool,
}

impl RenameEngine {
    pub fn new(sanitizer: NameSanitizer, resolver: CollisionResolver, dry_run: bool) -> Self {
        Self {
            sanitizer,
            resolver,
            dry_run,
        }
    }

    /// Engine with the standard table and suffix budget.
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            dry_run: cfg.dry_run,
            ..Self::default()
        }
    }

    /// Process every path, calling `on_outcome` as each one finishes.
    pub fn run<P, I, F>(&self, paths: I, mut on_outcome: F) -> BatchReport
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
        F: FnMut(&Outcome),
    {
        let mut report = BatchReport::default();
        let mut view = PlannedView::new();

        for path in paths {
            if shutdown::is_requested() {
                warn!("shutdown requested; leaving remaining files untouched");
                report.interrupted = true;
                break;
            }
            let outcome = self.process(path.as_ref(), &mut view);
            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }

        info!(
            renamed = report.renamed(),
            skipped = report.skipped(),
            failed = report.failures(),
            dry_run = self.dry_run,
            "batch finished"
        );
        report
    }

    fn process(&self, src: &Path, view: &mut PlannedView) -> Outcome {
        let checked = if self.dry_run && view.is_freed(src) {
            Err(FnCleanError::NotAFile {
                path: src.to_path_buf(),
                reason: "already renamed earlier in this run",
            })
        } else {
            ensure_regular_file(src)
        };
        if let Err(e) = checked {
            debug!(code = e.code(), kind = e.kind(), "skipping: {e}");
            return Outcome::Skipped {
                path: src.to_path_buf(),
                reason: e,
            };
        }

        let name = self.sanitizer.sanitize(src);
        if name.is_unchanged() {
            debug!(path = %src.display(), "name already clean");
            return Outcome::Unchanged(src.to_path_buf());
        }

        let dest = match self.resolver.resolve(&name, &*view) {
            Ok(p) => p,
            Err(e) => {
                error!(code = e.code(), kind = e.kind(), path = %src.display(), "{e}");
                return Outcome::Failed {
                    path: src.to_path_buf(),
                    error: e,
                };
            }
        };

        if self.dry_run {
            view.record(src, &dest);
            debug!(src = %src.display(), dest = %dest.display(), "dry-run: would rename");
            return Outcome::Planned {
                from: src.to_path_buf(),
                to: dest,
            };
        }

        match rename_no_clobber(src, &dest) {
            Ok(()) => {
                info!(src = %src.display(), dest = %dest.display(), "renamed");
                Outcome::Renamed {
                    from: src.to_path_buf(),
                    to: dest,
                }
            }
            Err(source) => {
                let msg = describe("rename", src, &source);
                let hint = hint_for(&source).unwrap_or("rename failed");
                let e = FnCleanError::RenameFailed {
                    from: src.to_path_buf(),
                    to: dest,
                    source,
                };
                error!(code = e.code(), kind = e.kind(), hint, "{msg}");
                Outcome::Failed {
                    path: src.to_path_buf(),
                    error: e,
                }
            }
        }
    }
}

/// Regular files only; symlinks are not followed.
fn ensure_regular_file(path: &Path) -> Result<(), FnCleanError> {
    let reason = match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_file() => return Ok(()),
        Ok(meta) if meta.file_type().is_dir() => "directory",
        Ok(meta) if meta.file_type().is_symlink() => "symlink",
        Ok(_) => "special file",
        Err(e) => hint_for(&e).unwrap_or("unreadable"),
    };
    Err(FnCleanError::NotAFile {
        path: path.to_path_buf(),
        reason,
    })
}
