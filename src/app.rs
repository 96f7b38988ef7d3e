//! Application orchestrator.
//! Builds the config from CLI flags, initializes logging, installs the
//! interrupt handler, runs the batch and turns its report into an exit status.

use anyhow::{bail, Context, Result};
use tracing::debug;

use fn_clean::cli::Args;
use fn_clean::output as out;
use fn_clean::{shutdown, FnCleanError, RenameEngine};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let cfg = args.to_config();

    init_tracing(cfg.log_level, cfg.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e:#}"));
        e
    })?;

    shutdown::install_handler(|| {
        out::print_warn("Received interrupt; finishing the current file and stopping.");
    })
    .context("failed to install signal handler")?;

    debug!(?cfg, files = args.files.len(), "Starting fn_clean");

    let engine = RenameEngine::from_config(&cfg);
    let report = engine.run(&args.files, |outcome| {
        if cfg.dry_run
            && let Some(line) = outcome.mapping_line()
        {
            out::print_user(&line);
        }
    });

    if report.interrupted {
        return Err(FnCleanError::Interrupted.into());
    }
    let failed = report.failures();
    if failed > 0 {
        bail!("{failed} of {} file(s) could not be renamed", args.files.len());
    }
    Ok(())
}
