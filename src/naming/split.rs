//! Path decomposition into directory, base name and extension.
//!
//! Rules:
//! - Everything up to and including the last separator is the directory.
//! - Without a separator the directory is `./`, so the parts always recombine
//!   into a usable path.
//! - The extension starts at the last dot of the final segment. A dotfile such
//!   as `.bashrc` therefore has an empty base name and the extension `.bashrc`.

use std::path::{Path, PathBuf};

use super::bytes::{bytes_to_path, is_separator, path_bytes};

/// Directory marker used when the input has no separator.
pub const CURRENT_DIR: &[u8] = b"./";

/// The three byte-level components of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    /// Directory including its trailing separator, never empty.
    pub directory: Vec<u8>,
    pub base_name: Vec<u8>,
    /// Extension including the leading dot, empty if there is none.
    pub extension: Vec<u8>,
}

impl PathParts {
    /// Recombine `directory + base + extension`.
    pub fn join_with_base(&self, base: &[u8]) -> Vec<u8> {
        let mut out =
            Vec::with_capacity(self.directory.len() + base.len() + self.extension.len());
        out.extend_from_slice(&self.directory);
        out.extend_from_slice(base);
        out.extend_from_slice(&self.extension);
        out
    }

    /// Recombine into a path, inserting `suffix` between base and extension.
    pub fn to_path_with(&self, base: &[u8], suffix: &str) -> PathBuf {
        let mut stem = base.to_vec();
        stem.extend_from_slice(suffix.as_bytes());
        bytes_to_path(self.join_with_base(&stem))
    }
}

/// Split a path into its directory, base name and extension.
pub fn split(path: &Path) -> PathParts {
    split_bytes(&path_bytes(path))
}

/// Byte-level worker behind [`split`].
pub fn split_bytes(raw: &[u8]) -> PathParts {
    let (directory, name) = match raw.iter().rposition(|&b| is_separator(b)) {
        Some(pos) => (raw[..=pos].to_vec(), &raw[pos + 1..]),
        None => (CURRENT_DIR.to_vec(), raw),
    };

    let (base_name, extension) = match name.iter().rposition(|&b| b == b'.') {
        Some(dot) => (name[..dot].to_vec(), name[dot..].to_vec()),
        None => (name.to_vec(), Vec::new()),
    };

    PathParts {
        directory,
        base_name,
        extension,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(dir: &str, base: &str, ext: &str) -> PathParts {
        PathParts {
            directory: dir.as_bytes().to_vec(),
            base_name: base.as_bytes().to_vec(),
            extension: ext.as_bytes().to_vec(),
        }
    }

    #[test]
    fn full_path_with_extension() {
        assert_eq!(
            split_bytes(b"/home/me/My File.tar.gz"),
            parts("/home/me/", "My File.tar", ".gz")
        );
    }

    #[test]
    fn bare_name_gets_current_dir() {
        assert_eq!(split_bytes(b"notes.txt"), parts("./", "notes", ".txt"));
    }

    #[test]
    fn no_extension() {
        assert_eq!(split_bytes(b"a/b/README"), parts("a/b/", "README", ""));
    }

    #[test]
    fn dots_in_directory_do_not_leak_into_extension() {
        assert_eq!(split_bytes(b"./conf.d/file"), parts("./conf.d/", "file", ""));
    }

    #[test]
    fn trailing_separator_leaves_name_empty() {
        assert_eq!(split_bytes(b"some/dir/"), parts("some/dir/", "", ""));
    }

    #[test]
    fn leading_dot_is_the_extension_boundary() {
        assert_eq!(split_bytes(b".bashrc"), parts("./", "", ".bashrc"));
        assert_eq!(split_bytes(b"home/.bashrc"), parts("home/", "", ".bashrc"));
    }

    #[test]
    fn recombines_to_input_when_directory_present() {
        let raw = b"x/y/name.ext";
        let p = split_bytes(raw);
        assert_eq!(p.join_with_base(&p.base_name), raw.to_vec());
    }

    #[test]
    fn suffix_goes_before_extension() {
        let p = split_bytes(b"d/a_b.txt");
        assert_eq!(p.to_path_with(b"a_b", "_3"), PathBuf::from("d/a_b_3.txt"));
    }
}
