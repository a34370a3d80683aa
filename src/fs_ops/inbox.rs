//! Inbox listing.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::ArchiveError;

/// File names in `inbox`, in directory order.
///
/// Dot-entries and directories are skipped, as are names that are not valid
/// UTF-8. A missing inbox yields an empty list.
pub fn list_inbox(inbox: &Path) -> Result<Vec<String>, ArchiveError> {
    let entries = match fs::read_dir(inbox) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(inbox = %inbox.display(), "inbox missing; nothing to do");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ArchiveError::InboxUnreadable {
                path: inbox.to_path_buf(),
                source,
            });
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ArchiveError::InboxUnreadable {
            path: inbox.to_path_buf(),
            source,
        })?;
        let Ok(name) = entry.file_name().into_string() else {
            warn!(entry = ?entry.file_name(), "skipping non UTF-8 file name");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        names.push(name);
    }
    debug!(inbox = %inbox.display(), count = names.len(), "listed inbox");
    Ok(names)
}
