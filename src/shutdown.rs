//! Process-wide shutdown coordination.
//! The ctrlc handler sets the flag; the archiver checks it before each file so
//! an interrupted batch never stops halfway through a move.
//!
//! Relaxed atomics are sufficient for a one-way "stop" flag.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Request a cooperative shutdown (idempotent).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

/// Check whether a shutdown has been requested.
#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Clear the flag (tests and embedders running several batches).
#[inline]
pub fn reset() {
    SHUTDOWN.store(false, Ordering::Relaxed);
}
