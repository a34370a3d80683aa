//! Default path helpers and symlink checks.
//! Determines the home-relative archive root and log path, and detects symlinked ancestors.

use dirs::{data_dir, home_dir};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CLOUD_DIR_NAME;

/// Default archive root: `$HOME/Dropbox`.
pub fn default_root() -> Option<PathBuf> {
    home_dir().map(|h| h.join(CLOUD_DIR_NAME))
}

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(mut base) = data_dir() {
        base.push("doc_archive");
        base.push("doc_archive.log");
        Some(base)
    } else {
        home_dir().map(|h| {
            h.join(".local")
                .join("share")
                .join("doc_archive")
                .join("doc_archive.log")
        })
    }
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_log_path_names_the_tool() {
        if let Some(p) = default_log_path() {
            assert!(p.ends_with("doc_archive/doc_archive.log"));
        }
    }

    #[test]
    fn plain_directories_have_no_symlink_ancestor() {
        let td = tempdir().unwrap();
        let log = td.path().join("logs").join("a.log");
        fs::create_dir_all(log.parent().unwrap()).unwrap();
        assert!(!path_has_symlink_ancestor(&log).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_parent_is_detected() {
        let td = tempdir().unwrap();
        let real = td.path().join("real");
        fs::create_dir_all(&real).unwrap();
        let link = td.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();
        assert!(path_has_symlink_ancestor(&link.join("a.log")).unwrap());
    }
}
