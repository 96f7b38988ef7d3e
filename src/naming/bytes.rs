//! Path <-> byte conversions.
//! Unix paths are arbitrary bytes; elsewhere we fall back to the lossy UTF-8 form.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Raw bytes of a path, borrowed where the platform allows it.
#[cfg(unix)]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Build a path back from bytes produced by `path_bytes`.
#[cfg(unix)]
pub fn bytes_to_path(bytes: Vec<u8>) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
pub fn bytes_to_path(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}

/// Whether `b` separates path segments on this platform.
#[inline]
pub fn is_separator(b: u8) -> bool {
    #[cfg(windows)]
    {
        b == b'/' || b == b'\\'
    }
    #[cfg(not(windows))]
    {
        b == b'/'
    }
}
