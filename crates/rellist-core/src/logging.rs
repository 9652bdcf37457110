//! Logging init.
//!
//! Stdout carries listings, so log lines only ever go to the state-dir log
//! file or, when that cannot be opened, to stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,rellist=debug";

/// `$XDG_STATE_HOME/rellist/rellist.log` (usually `~/.local/state/rellist/rellist.log`).
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rellist")?;
    Ok(xdg_dirs.get_state_home().join("rellist").join("rellist.log"))
}

/// Subscriber writing plain-text lines to `writer`, filtered by `RUST_LOG`.
fn subscriber<W>(writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish()
}

/// Initialize logging to the state-dir log file, appending.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let log_file_path = log_path()?;
    if let Some(dir) = log_file_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log dir: {}", dir.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("open log file: {}", log_file_path.display()))?;

    tracing::subscriber::set_global_default(subscriber(Mutex::new(file)))
        .context("install log subscriber")?;

    tracing::info!("rellist logging initialized at {}", log_file_path.display());
    Ok(())
}

/// Initialize logging to stderr only. Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    let _ = tracing::subscriber::set_global_default(subscriber(std::io::stderr));
}
