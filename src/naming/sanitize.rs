//! Candidate name construction: split, rewrite the base name, recombine.
//! Directory and extension are carried through untouched.

use std::path::{Path, PathBuf};

use super::bytes::bytes_to_path;
use super::policy::CharacterPolicy;
use super::split::{split, PathParts};

/// Result of sanitizing one path, before collision checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedPath {
    pub parts: PathParts,
    pub base_name: String,
    pub candidate: PathBuf,
}

impl SanitizedPath {
    /// True when the rewrite left the base name as it was.
    pub fn is_unchanged(&self) -> bool {
        self.base_name.as_bytes() == self.parts.base_name.as_slice()
    }

    /// Candidate with a numeric disambiguator before the extension.
    pub fn with_disambiguator(&self, n: u32) -> PathBuf {
        self.parts
            .to_path_with(self.base_name.as_bytes(), &format!("_{n}"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct NameSanitizer {
    policy: CharacterPolicy,
}

impl NameSanitizer {
    pub fn new(policy: CharacterPolicy) -> Self {
        Self { policy }
    }

    pub fn sanitize(&self, path: &Path) -> SanitizedPath {
        let parts = split(path);
        let base_name = self.policy.rewrite(&parts.base_name);
        let candidate = bytes_to_path(parts.join_with_base(base_name.as_bytes()));
        SanitizedPath {
            parts,
            base_name,
            candidate,
        }
    }
}
