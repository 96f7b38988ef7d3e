//! Core library for `fn_clean`.
//!
//! Renames files so their base names only contain safe characters, without
//! ever replacing an existing file. The pipeline per file is:
//! split -> rewrite base name -> recombine -> pick a free name -> rename.
//!
//! - `naming`: pure path splitting and character substitution.
//! - `fs_ops`: collision probing, the no-clobber rename and the batch driver.
//! - `cli`, `config`, `output`, `shutdown`: glue for the binary.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod naming;
pub mod output;
pub mod shutdown;

pub use config::{Config, LogLevel};
pub use errors::FnCleanError;
pub use fs_ops::{BatchReport, CollisionResolver, Outcome, RenameEngine};
pub use naming::{CharacterPolicy, NameSanitizer, PathParts, ReplacementTable, split};
