//! Atomic rename helper.
//! - Performs a rename with context-rich errors.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::io;
use std::path::Path;

/// Rename `src` to `dst`. The raw `io::Error` is returned so callers can detect
/// cross-device failures and fall back to copying.
pub(super) fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;

    // Ignore fsync errors to avoid turning a successful rename into a failure.
    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
