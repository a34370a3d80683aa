//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - Verbosity selects which action lines reach the console.
//! - LogLevel drives the tracing diagnostics.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::paths;
use super::{DOCUMENTS_DIR_NAME, INBOX_DIR_NAME};

/// Which action lines are echoed to the console.
/// Every line is still kept in the in-memory action log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Nothing on the console, not even the summary
    Silent,
    /// Skips, failures and the summary; successful moves stay quiet (default)
    #[default]
    WhenNotMoved,
    /// Every line
    All,
}

impl Verbosity {
    /// Parse common names (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "none" | "0" => Some(Verbosity::Silent),
            "when-not-moved" | "when_not_moved" | "skipped" | "1" => Some(Verbosity::WhenNotMoved),
            "all" | "2" => Some(Verbosity::All),
            _ => None,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verbosity::Silent => "silent",
            Verbosity::WhenNotMoved => "when-not-moved",
            Verbosity::All => "all",
        };
        f.write_str(s)
    }
}

impl FromStr for Verbosity {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid verbosity: '{s}'"))
    }
}

/// Program-defined diagnostic levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors (default; action lines are the primary output)
    #[default]
    Quiet,
    /// Warnings and moves
    Normal,
    /// Every resolution decision
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration used by the archiver.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cloud storage root holding `Inbox/` and `Documents/`
    pub root: PathBuf,
    /// Console echo of action lines
    pub verbosity: Verbosity,
    /// If true, log actions but do not modify the filesystem
    pub dry_run: bool,
    /// Stop after this many successful moves
    pub max_files: Option<usize>,
    /// Diagnostic verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: paths::default_root().unwrap_or_else(|| PathBuf::from(super::CLOUD_DIR_NAME)),
            verbosity: Verbosity::default(),
            dry_run: false,
            max_files: None,
            log_level: LogLevel::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// Construct a Config for `root`; other fields use defaults.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Where new documents arrive.
    pub fn inbox_dir(&self) -> PathBuf {
        self.root.join(INBOX_DIR_NAME)
    }

    /// Root of the year-partitioned document tree.
    pub fn documents_dir(&self) -> PathBuf {
        self.root.join(DOCUMENTS_DIR_NAME)
    }

    /// Render `path` for action lines: the root is replaced with `...`.
    /// Paths outside the root are shown as-is.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) => {
                let parts: Vec<_> = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect();
                format!(".../{}", parts.join("/"))
            }
            Err(_) => path.display().to_string(),
        }
    }
}
