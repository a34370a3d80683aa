//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Without flags the tool archives `$HOME/Dropbox/Inbox` with the default verbosity.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel, Verbosity};

/// Move dated PDF documents from `<root>/Inbox` into `<root>/Documents/<year>`.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "File dated PDF documents from an inbox into year folders"
)]
pub struct Args {
    /// Archive root containing Inbox/ and Documents/ (default: $HOME/Dropbox).
    #[arg(long, value_hint = ValueHint::DirPath, help = "Archive root containing Inbox/ and Documents/")]
    pub root: Option<PathBuf>,

    /// Console verbosity for action lines.
    #[arg(
        long,
        value_name = "MODE",
        help = "Console output: silent, when-not-moved (default), all"
    )]
    pub verbosity: Option<Verbosity>,

    /// Dry-run: log actions but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be done, but do not move files or create directories"
    )]
    pub dry_run: bool,

    /// Stop after this many documents were moved.
    #[arg(long, value_name = "N", help = "Move at most N documents")]
    pub max: Option<usize>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set diagnostic log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append diagnostics to this file as well.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Also write diagnostics to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit diagnostics in structured JSON")]
    pub json: bool,

    /// Print the inbox and documents paths that would be used, then exit.
    #[arg(long, help = "Print the inbox and documents directories and exit")]
    pub print_paths: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(root) = &self.root {
            cfg.root = root.clone();
        }
        if let Some(v) = self.verbosity {
            cfg.verbosity = v;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.max.is_some() {
            cfg.max_files = self.max;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
