//! Application orchestrator.
//! Builds the config from flags, initializes logging, runs the sort, and reports
//! the outcome. Every error ends the run; the exit status comes from its kind.

use anyhow::Result;
use tracing::{debug, error};

use photo_sort::cli::Args;
use photo_sort::output as out;
use photo_sort::{PhotoSortError, organize};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let cfg = args.to_config();

    // Hold the guard for the whole run so the file appender flushes on exit.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json_logs).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    debug!("Starting photo_sort: {:?}", args);

    match organize(&cfg, out::print_outcome) {
        Ok(summary) => {
            out::print_success(&out::summary_line(&summary, cfg.dry_run));
            Ok(())
        }
        Err(e) => {
            let code = e.exit_code();
            match &e {
                PhotoSortError::MoveFailure { src, dest, detail } => {
                    error!(code, kind = e.kind(), src = %src.display(), dest = %dest.display(), %detail, "Move failed; stopping")
                }
                PhotoSortError::InvalidSourceDirectory { path, reason } => {
                    error!(code, kind = e.kind(), path = %path.display(), %reason, "Invalid directory")
                }
                PhotoSortError::DirectoryCreation { path, source } => {
                    error!(code, kind = e.kind(), path = %path.display(), error = %source, "Cannot create month directory")
                }
                _ => error!(code, kind = e.kind(), error = %e, "Sorting stopped"),
            }
            out::print_error(&e.to_string());
            Err(e.into())
        }
    }
}

/// Exit status for an error returned by `run`.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<PhotoSortError>()
        .map(PhotoSortError::exit_code)
        .unwrap_or(1)
}
