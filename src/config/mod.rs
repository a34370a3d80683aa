//! Config module.
//! Provides configuration types, default paths and validation.
//! There is no config file: defaults are home-relative and CLI flags override them.

pub mod paths;
pub mod types;
mod validate;

pub use paths::{default_log_path, default_root, path_has_symlink_ancestor};
pub use types::{Config, LogLevel, Verbosity};
pub use validate::validate_and_normalize;

/// Folder under the home directory used as the default root.
pub const CLOUD_DIR_NAME: &str = "Dropbox";
/// Inbox folder under the root.
pub const INBOX_DIR_NAME: &str = "Inbox";
/// Year-partitioned document tree under the root.
pub const DOCUMENTS_DIR_NAME: &str = "Documents";
