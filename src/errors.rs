//! Typed error definitions for doc_archive.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("sequence number {value} does not map to a letter (allowed: 0-25)")]
    SequenceOutOfRange { name: String, value: String },

    #[error("Archive root is missing or not a directory: {0}")]
    RootInvalid(PathBuf),

    #[error("Cannot read inbox {path}: {source}")]
    InboxUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl ArchiveError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            ArchiveError::SequenceOutOfRange { .. } => 10,
            ArchiveError::RootInvalid(_) => 20,
            ArchiveError::InboxUnreadable { .. } => 21,
            ArchiveError::Interrupted => 130,
        }
    }
}
