use std::fs;
use std::path::Path;
use tempfile::tempdir;

use fn_clean::fs_ops::{CollisionResolver, FsView, MAX_DISAMBIGUATOR};
use fn_clean::{FnCleanError, NameSanitizer};

fn resolve(src: &Path) -> Result<std::path::PathBuf, FnCleanError> {
    let name = NameSanitizer::default().sanitize(src);
    CollisionResolver::default().resolve(&name, &FsView)
}

#[test]
fn no_collision_returns_candidate() {
    let td = tempdir().unwrap();
    let dst = resolve(&td.path().join("a b.txt")).unwrap();
    assert_eq!(dst, td.path().join("a_b.txt"));
}

#[test]
fn counter_starts_at_one() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a_b.txt"), b"x").unwrap();
    let dst = resolve(&td.path().join("a b.txt")).unwrap();
    assert_eq!(dst, td.path().join("a_b_1.txt"));
}

#[test]
fn extension_is_kept_after_suffix() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("photo.JPEG"), b"x").unwrap();
    let dst = resolve(&td.path().join("photo.JPEG")).unwrap();
    assert_eq!(dst, td.path().join("photo_1.JPEG"));
}

#[test]
fn gaps_are_filled_first() {
    let td = tempdir().unwrap();
    for f in ["r", "r_1", "r_3"] {
        fs::write(td.path().join(f), b"x").unwrap();
    }
    let dst = resolve(&td.path().join("r")).unwrap();
    assert_eq!(dst, td.path().join("r_2"));
}

#[test]
fn last_free_suffix_is_254() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a_b"), b"x").unwrap();
    for n in 1..254 {
        fs::write(td.path().join(format!("a_b_{n}")), b"x").unwrap();
    }
    let dst = resolve(&td.path().join("a b")).unwrap();
    assert_eq!(dst, td.path().join("a_b_254"));
}

#[test]
fn collision_255_is_exhausted() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a_b"), b"x").unwrap();
    for n in 1..MAX_DISAMBIGUATOR {
        fs::write(td.path().join(format!("a_b_{n}")), b"x").unwrap();
    }
    let err = resolve(&td.path().join("a b")).unwrap_err();
    match err {
        FnCleanError::ExhaustedRetries { attempts, .. } => assert_eq!(attempts, 254),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!td.path().join("a_b_255").exists());
}

#[cfg(unix)]
#[test]
fn dangling_symlink_counts_as_taken() {
    let td = tempdir().unwrap();
    std::os::unix::fs::symlink(td.path().join("nowhere"), td.path().join("s")).unwrap();
    let dst = resolve(&td.path().join("s")).unwrap();
    assert_eq!(dst, td.path().join("s_1"));
}
