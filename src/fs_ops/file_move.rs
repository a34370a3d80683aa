//! Document move implementation.
//! Attempts an atomic rename; across filesystems falls back to safe copy+rename.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use super::atomic::try_atomic_move;
use super::copy::safe_copy_and_rename;
use super::helpers::io_error_with_help;
use super::util::is_cross_device;

/// Move `src` to the already-resolved `dest`, creating the year directory on demand.
/// A year directory created here is removed again if the move fails.
pub fn move_document(src: &Path, dest: &Path) -> Result<()> {
    let mut created = None;
    if let Some(dir) = dest.parent()
        && !dir.is_dir()
    {
        fs::create_dir_all(dir).map_err(io_error_with_help("create year directory", dir))?;
        debug!(dir = %dir.display(), "created destination directory");
        created = Some(dir);
    }

    let result = transfer(src, dest);
    if result.is_err()
        && let Some(dir) = created
    {
        // Only succeeds while the directory is still empty.
        match fs::remove_dir(dir) {
            Ok(()) => debug!(dir = %dir.display(), "removed year directory after failed move"),
            Err(e) => debug!(dir = %dir.display(), error = %e, "left year directory in place"),
        }
    }
    result
}

fn transfer(src: &Path, dest: &Path) -> Result<()> {
    match try_atomic_move(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "Renamed document atomically");
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            warn!(error = %e, "cross-filesystem rename, using safe copy+rename");
            safe_copy_and_rename(src, dest)?;
            fs::remove_file(src).map_err(io_error_with_help("remove original document", src))?;
            info!(src = %src.display(), dest = %dest.display(), "Copied document and removed source");
            Ok(())
        }
        Err(e) => Err(io_error_with_help("move document", src)(e)),
    }
}
