//! Core library for `doc_archive`.
//!
//! Files dated PDF documents from an inbox into year folders:
//! `<root>/Inbox/20250624_Invoice.pdf` -> `<root>/Documents/2025/Invoice_20250624.pdf`.
//!
//! - [`naming`]: filename normalization, year extraction, sequence letters.
//! - [`resolver`]: destination + collision loop against an [`ExistenceCheck`].
//! - [`archiver`]: the batch driver with verbosity, dry run and summary report.

pub mod archiver;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod naming;
pub mod output;
pub mod report;
pub mod resolver;
pub mod shutdown;

pub use archiver::{Action, ActionKind, DocumentArchiver};
pub use config::{Config, LogLevel, Verbosity, default_log_path, default_root, path_has_symlink_ancestor};
pub use errors::ArchiveError;
pub use naming::{extract_year, next_name, normalize_name};
pub use report::DestinationReport;
pub use resolver::{
    ExistenceCheck, FsExistence, MAX_COLLISION_ATTEMPTS, Overlay, Resolution, resolve_destination,
};
