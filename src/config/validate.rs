//! Config validation logic.
//! Verifies the archive root and the shape of its `Inbox/` and `Documents/` children.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use crate::errors::ArchiveError;

use super::types::Config;

impl Config {
    /// Validate the root and, when present, the inbox and document directories.
    ///
    /// A missing inbox is fine (nothing to do); a missing `Documents/` is created
    /// lazily by the first move.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            error!(root = %self.root.display(), "archive root missing or not a directory");
            return Err(ArchiveError::RootInvalid(self.root.clone()).into());
        }

        let inbox = self.inbox_dir();
        if inbox.exists() {
            ensure_is_dir(&inbox, "inbox")?;
            fs::read_dir(&inbox).with_context(|| {
                format!("Cannot read inbox directory '{}'; check permissions", inbox.display())
            })?;
            debug!("inbox readable: {}", inbox.display());
        } else {
            debug!("inbox does not exist yet: {}", inbox.display());
        }

        let docs = self.documents_dir();
        if docs.exists() {
            ensure_is_dir(&docs, "documents")?;
        }

        info!(
            "Config validated: root='{}' verbosity={} dry_run={} log_file='{}'",
            self.root.display(),
            self.verbosity,
            self.dry_run,
            self.log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".into())
        );
        Ok(())
    }
}

/// Validate, then replace the root with its canonical form.
pub fn validate_and_normalize(cfg: &mut Config) -> Result<()> {
    cfg.validate()?;
    cfg.root = dunce::canonicalize(&cfg.root)
        .with_context(|| format!("Failed to canonicalize root '{}'", cfg.root.display()))?;
    Ok(())
}

fn ensure_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.is_dir() {
        error!("{name} exists but isn't a directory: {}", path.display());
        bail!("{name} exists but isn't a directory: {}", path.display());
    }
    Ok(())
}
