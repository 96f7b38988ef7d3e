//! I/O error hints.
//!
//! Maps raw OS codes (or the io::ErrorKind when there is none) to a short,
//! actionable hint so per-file failures say more than "os error 18".
//!
//! Used when a stat or rename fails: the hint becomes the skip reason or is
//! attached to the rename error log.

use std::io;
use std::path::Path;

/// Short hint for a failed filesystem call, if we know one.
pub fn hint_for(e: &io::Error) -> Option<&'static str> {
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            return match code {
                libc::EACCES | libc::EPERM => {
                    Some("permission denied; check ownership and directory write permission")
                }
                libc::EXDEV => Some("cross-device link; source and target are on different filesystems"),
                libc::ENOENT => Some("path not found; the file may have vanished"),
                libc::EEXIST => Some("target already exists"),
                libc::EBUSY => Some("resource busy"),
                libc::EROFS => Some("read-only filesystem"),
                libc::ENAMETOOLONG => Some("file name too long"),
                libc::ELOOP => Some("too many symbolic link levels"),
                _ => None,
            };
        }
        #[cfg(windows)]
        {
            return match code {
                5 => Some("access denied"),                          // ERROR_ACCESS_DENIED
                2 | 3 => Some("path not found; the file may have vanished"),
                17 => Some("not same device"),                       // ERROR_NOT_SAME_DEVICE
                32 => Some("sharing violation; file is in use"),     // ERROR_SHARING_VIOLATION
                80 | 183 => Some("target already exists"),
                206 => Some("file name too long"),                   // ERROR_FILENAME_EXCED_RANGE
                _ => None,
            };
        }
        #[cfg(not(any(unix, windows)))]
        {
            let _ = code;
        }
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied"),
        io::ErrorKind::NotFound => Some("path not found; the file may have vanished"),
        io::ErrorKind::AlreadyExists => Some("target already exists"),
        _ => None,
    }
}

/// Format `op 'path': error (hint) [os code: N]`.
pub fn describe(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(hint) = hint_for(e) {
        msg.push_str(&format!(" ({hint})"));
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}
