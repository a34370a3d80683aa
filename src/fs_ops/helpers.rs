//! I/O helper utilities.
//!
//! Enriches io::Error with the operation, the path and an actionable hint, for
//! use with `map_err` in anyhow-returning code:
//!
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create year directory", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Format a human-friendly message with op/path plus platform-aware hints.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        match code {
            libc::EACCES | libc::EPERM => {
                msg.push_str(" (permission denied; check ownership and write permissions)");
            }
            libc::EXDEV => msg.push_str(" (cross-filesystem; atomic rename not possible)"),
            libc::ENOENT => msg.push_str(" (path not found; verify it exists)"),
            libc::EEXIST => msg.push_str(" (already exists)"),
            libc::ENOSPC => msg.push_str(" (insufficient space on device)"),
            libc::EROFS => msg.push_str(" (read-only filesystem)"),
            libc::ENAMETOOLONG => msg.push_str(" (filename or path too long)"),
            _ => {}
        }
        msg.push_str(&format!(" [os code: {code}]"));
        return msg;
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => {
            msg.push_str(" (permission denied; check ownership and write permissions)");
        }
        io::ErrorKind::NotFound => msg.push_str(" (path not found; verify it exists)"),
        io::ErrorKind::AlreadyExists => msg.push_str(" (already exists)"),
        _ => {}
    }
    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}
