//! Filesystem-facing operations: collision probing, rename, batch driver.

mod atomic;
pub mod collision;
pub mod engine;
mod helpers;

pub use atomic::rename_no_clobber;
pub use collision::{CollisionResolver, FsView, MAX_DISAMBIGUATOR, NameLookup, PlannedView};
pub use engine::{BatchReport, Outcome, RenameEngine};
pub use helpers::{describe as describe_io_error, hint_for};
