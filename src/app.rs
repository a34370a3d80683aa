//! Application orchestrator.
//! Builds the config from defaults and CLI flags, initializes logging, installs the
//! Ctrl-C handler, validates the root and runs one archive batch.

use anyhow::Result;
use doc_archive::cli::Args;
use doc_archive::config::validate_and_normalize;
use doc_archive::output as out;
use doc_archive::{ArchiveError, Config, DocumentArchiver, shutdown};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);

    if args.print_paths {
        out::print_info(&format!("Inbox:     {}", cfg.inbox_dir().display()));
        out::print_info(&format!("Documents: {}", cfg.documents_dir().display()));
        return Ok(());
    }

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    // Guard is dropped on SIGINT to flush the file log
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        let installed = ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; finishing the current file and stopping...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        });
        if let Err(e) = installed {
            out::print_warn(&format!("Could not install Ctrl-C handler: {e}"));
        }
    }

    debug!("Starting doc_archive: {:?}", args);

    let result = (|| -> Result<()> {
        validate_and_normalize(&mut cfg)?;
        let mut archiver = DocumentArchiver::new(cfg);
        let lines = archiver.run()?;
        info!(
            actions = lines.len(),
            moved = archiver.report().total(),
            dry_run = archiver.config().dry_run,
            "Archive run completed"
        );
        if archiver.was_interrupted() {
            return Err(ArchiveError::Interrupted.into());
        }
        Ok(())
    })();

    if let Err(e) = &result {
        if let Some(ae) = e.downcast_ref::<ArchiveError>() {
            let code = ae.code();
            match ae {
                ArchiveError::RootInvalid(root) => {
                    error!(code, kind = "root_invalid", root = %root.display(), "Archive run failed")
                }
                ArchiveError::InboxUnreadable { path, source } => {
                    error!(code, kind = "inbox_unreadable", path = %path.display(), error = %source, "Archive run failed")
                }
                ArchiveError::Interrupted => {
                    error!(code, kind = "interrupted", "Archive run aborted by user")
                }
                other => error!(code, kind = "archive_error", error = ?other, "Archive run failed"),
            }
        } else {
            error!(error = ?e, "Archive run failed");
        }
    }

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}
