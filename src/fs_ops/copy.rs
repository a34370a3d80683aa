//! Safe copy-and-rename helper for moves that cross filesystems:
//! - Copies to a temp file in the destination directory
//! - Fsyncs the temp file
//! - Renames temp -> dest (fsyncs the directory on Unix)

use anyhow::{Context, Result, anyhow};
use std::fs::{self, File};
use std::path::Path;

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;
use super::util;

pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> Result<()> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| anyhow!("destination has no parent: {}", dest.display()))?;

    let tmp_path = util::unique_temp_path(dest_dir);

    fs::copy(src, &tmp_path).map_err(io_error_with_help("copy to temporary file", &tmp_path))?;
    if let Err(e) = File::open(&tmp_path).and_then(|f| f.sync_all()) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error_with_help("sync temporary file", &tmp_path)(e));
    }

    if let Err(e) = try_atomic_move(&tmp_path, dest) {
        // Best-effort cleanup of the temp file on failure.
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| {
            format!(
                "rename temporary file '{}' -> '{}'",
                tmp_path.display(),
                dest.display()
            )
        });
    }

    Ok(())
}
