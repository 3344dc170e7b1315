//! Reporting capability handed to every operation, plus process log setup.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sink for progress messages. Passed explicitly so the core stays free of
/// process-wide state.
pub trait Reporter {
    /// Phase-level progress (reading, writing, backups).
    fn info(&self, message: &str);
    /// Per-line decisions.
    fn debug(&self, message: &str);
}

/// Forwards to `tracing` under the `hosts_merge` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!(target: "hosts_merge", "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "hosts_merge", "{message}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}
}

/// Install the stderr subscriber. `RUST_LOG` wins unless `verbose` is set.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
