//! Batch driver: list the inbox, resolve each document, move (or simulate), log.
//!
//! One file at a time, in listing order. Per-file problems become action lines
//! and never abort the batch; only an unreadable inbox is an error.

use std::fmt;
use tracing::{debug, info, warn};

use crate::config::{Config, Verbosity};
use crate::errors::ArchiveError;
use crate::fs_ops::{list_inbox, move_document};
use crate::output as out;
use crate::report::DestinationReport;
use crate::resolver::{ExistenceCheck, FsExistence, Resolution, resolve_destination};
use crate::shutdown;

/// What happened to one inbox file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Moved,
    UnknownDestination,
    AlreadyExists,
    Rejected,
    Failed,
}

/// One line of the action log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub message: String,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Moves dated documents from `<root>/Inbox` to `<root>/Documents/<year>`.
pub struct DocumentArchiver<E = FsExistence> {
    config: Config,
    existing: E,
    actions: Vec<Action>,
    report: DestinationReport,
    interrupted: bool,
}

impl DocumentArchiver<FsExistence> {
    /// Archiver that checks destinations on the real filesystem.
    pub fn new(config: Config) -> Self {
        Self::with_existence(config, FsExistence)
    }
}

impl<E: ExistenceCheck> DocumentArchiver<E> {
    /// Archiver with a custom destination lookup (e.g. seeded paths in tests).
    pub fn with_existence(config: Config, existing: E) -> Self {
        Self {
            config,
            existing,
            actions: Vec::new(),
            report: DestinationReport::new(),
            interrupted: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn action_lines(&self) -> Vec<String> {
        self.actions.iter().map(|a| a.message.clone()).collect()
    }

    /// Per-year counts of the last batch.
    pub fn report(&self) -> &DestinationReport {
        &self.report
    }

    /// True when the last batch stopped early on Ctrl-C.
    pub fn was_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Candidate file names in the inbox.
    pub fn list(&self) -> Result<Vec<String>, ArchiveError> {
        list_inbox(&self.config.inbox_dir())
    }

    /// List the inbox and archive everything in it. Returns this batch's action lines.
    pub fn run(&mut self) -> Result<Vec<String>, ArchiveError> {
        self.run_with(self.config.dry_run)
    }

    /// Same as [`run`](Self::run) without touching the filesystem.
    /// Only this call is simulated; the configured dry-run flag is left as is.
    pub fn simulate(&mut self) -> Result<Vec<String>, ArchiveError> {
        self.run_with(true)
    }

    fn run_with(&mut self, dry_run: bool) -> Result<Vec<String>, ArchiveError> {
        let names = self.list()?;
        Ok(self.archive_batch(names, dry_run))
    }

    /// Archive the given inbox file names in order. Returns this batch's action lines.
    pub fn archive_files<I, S>(&mut self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.archive_batch(names, self.config.dry_run)
    }

    fn archive_batch<I, S>(&mut self, names: I, dry_run: bool) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let first = self.actions.len();
        let mut moved = 0usize;
        self.interrupted = false;
        self.report = DestinationReport::new();

        for name in names {
            if let Some(max) = self.config.max_files
                && moved >= max
            {
                debug!(max, "reached maximum number of moves");
                break;
            }
            if shutdown::is_requested() {
                warn!(code = ArchiveError::Interrupted.code(), "interrupted; stopping before next file");
                self.interrupted = true;
                break;
            }
            if self.archive_one(name.as_ref(), dry_run) {
                moved += 1;
            }
        }

        if self.config.verbosity != Verbosity::Silent && !self.report.is_empty() {
            out::print_user(&self.report.to_string());
        }
        info!(moved, dry_run, "batch finished");

        self.actions[first..].iter().map(|a| a.message.clone()).collect()
    }

    /// Returns true when the document was moved (or would be, in a dry run).
    fn archive_one(&mut self, raw: &str, dry_run: bool) -> bool {
        let docs = self.config.documents_dir();
        let resolution = match resolve_destination(raw, &docs, &self.existing) {
            Ok(r) => r,
            Err(e) => {
                warn!(code = e.code(), file = raw, error = %e, "rejected file name");
                self.log(ActionKind::Rejected, format!("Skipping \"{raw}\", {e}"));
                return false;
            }
        };

        match resolution {
            Resolution::UnknownDestination => {
                self.log(
                    ActionKind::UnknownDestination,
                    format!("Skipping \"{raw}\", don't know where to store it"),
                );
                false
            }
            Resolution::AlreadyExists { last_candidate } => {
                debug!(file = raw, last = %last_candidate.display(), "no free name");
                self.log(
                    ActionKind::AlreadyExists,
                    format!("Skipping \"{raw}\", already exists on destination"),
                );
                false
            }
            Resolution::Destination { year, path, .. } => {
                if !dry_run {
                    let src = self.config.inbox_dir().join(raw);
                    if let Err(e) = move_document(&src, &path) {
                        warn!(file = raw, error = %e, "move failed");
                        self.log(ActionKind::Failed, format!("Failed to move \"{raw}\": {e:#}"));
                        return false;
                    }
                }
                let shown = self.config.display_path(&path);
                self.log(ActionKind::Moved, format!("Move \"{raw}\" to \"{shown}\""));
                self.report.record(&year);
                true
            }
        }
    }

    fn log(&mut self, kind: ActionKind, message: String) {
        let echo = match self.config.verbosity {
            Verbosity::Silent => false,
            Verbosity::WhenNotMoved => kind != ActionKind::Moved,
            Verbosity::All => true,
        };
        if echo {
            out::print_user(&message);
        }
        self.actions.push(Action { kind, message });
    }
}
