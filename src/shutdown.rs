//! Process-wide stop flag.
//! The Ctrl-C handler sets it; the batch driver checks it between files, so
//! the file in progress always finishes and the rest stay untouched.
//!
//! Notes:
//! - Relaxed atomics are sufficient for a one-way "stop" flag.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Request a cooperative stop (idempotent).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Install a Ctrl-C handler that calls [`request`] and then `on_signal`.
pub fn install_handler<F>(on_signal: F) -> Result<(), ctrlc::Error>
where
    F: Fn() + Send + 'static,
{
    ctrlc::set_handler(move || {
        request();
        on_signal();
    })
}

/// Test-only: clear the flag.
#[cfg(any(test, feature = "test-utils"))]
#[inline]
pub fn reset() {
    SHUTDOWN.store(false, Ordering::Relaxed);
}
