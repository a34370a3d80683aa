//! Destination resolution: normalized name + year folder + collision loop.
//!
//! The resolver never touches the filesystem directly; whether a candidate is
//! taken is answered by an [`ExistenceCheck`], so tests can seed fake
//! destinations without creating files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::errors::ArchiveError;
use crate::naming::{extract_year, next_name, normalize_name};

/// Upper bound on collision renames for a single file.
pub const MAX_COLLISION_ATTEMPTS: usize = 20;

/// Answers "is this destination already taken?".
pub trait ExistenceCheck {
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem lookup. Any entry counts as taken, dangling symlinks included.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsExistence;

impl ExistenceCheck for FsExistence {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }
}

impl ExistenceCheck for HashSet<PathBuf> {
    fn exists(&self, path: &Path) -> bool {
        self.contains(path)
    }
}

impl<F> ExistenceCheck for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Seeded paths layered over the real filesystem.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    seeded: HashSet<PathBuf>,
}

impl Overlay {
    pub fn new<I, P>(seeded: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            seeded: seeded.into_iter().map(Into::into).collect(),
        }
    }
}

impl ExistenceCheck for Overlay {
    fn exists(&self, path: &Path) -> bool {
        self.seeded.contains(path) || FsExistence.exists(path)
    }
}

/// Outcome of resolving one raw filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A free destination was found.
    Destination {
        name: String,
        year: String,
        path: PathBuf,
    },
    /// No year could be read from the name.
    UnknownDestination,
    /// Every candidate tried was taken (or no further letter was available).
    AlreadyExists { last_candidate: PathBuf },
}

/// Compute where `raw_name` belongs under `doc_root`.
///
/// Errors only for names that cannot be normalized (numeric sequence out of range).
pub fn resolve_destination(
    raw_name: &str,
    doc_root: &Path,
    existing: &dyn ExistenceCheck,
) -> Result<Resolution, ArchiveError> {
    let mut name = normalize_name(raw_name)?;
    let Some(mut year) = extract_year(&name) else {
        debug!(raw = raw_name, "no date in name");
        return Ok(Resolution::UnknownDestination);
    };
    let mut dest = doc_root.join(&year).join(&name);

    let mut attempts = 0;
    while existing.exists(&dest) && attempts < MAX_COLLISION_ATTEMPTS {
        let Some(next) = next_name(&name) else {
            trace!(name = %name, "no further sequence letter");
            break;
        };
        if let Some(y) = extract_year(&next) {
            year = y;
        }
        dest = doc_root.join(&year).join(&next);
        name = next;
        attempts += 1;
        trace!(attempt = attempts, candidate = %dest.display(), "collision, trying next name");
    }

    if existing.exists(&dest) {
        debug!(raw = raw_name, last = %dest.display(), attempts, "every candidate is taken");
        return Ok(Resolution::AlreadyExists {
            last_candidate: dest,
        });
    }

    debug!(raw = raw_name, dest = %dest.display(), attempts, "resolved destination");
    Ok(Resolution::Destination {
        name,
        year,
        path: dest,
    })
}
