//! Name handling: path splitting, character policy and candidate construction.
//! Pure functions only; nothing in here touches the filesystem.

pub mod bytes;
pub mod policy;
pub mod sanitize;
pub mod split;

pub use policy::{CharacterPolicy, ReplacementRule, ReplacementTable, is_safe_name};
pub use sanitize::{NameSanitizer, SanitizedPath};
pub use split::{PathParts, split};
