//! `rellist preset <name> <input>` – run every job of a preset.

use anyhow::Result;
use rellist_core::config::RellistConfig;
use rellist_core::job::run_job;
use std::io::Write;
use std::path::Path;

use super::input::{read_document, write_document};

/// Jobs run in preset order against one document, so a job sees the rows
/// removed by the jobs before it.
pub fn run_preset<W: Write>(
    cfg: &RellistConfig,
    name: &str,
    input: &Path,
    rewrite: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let preset = cfg.preset(name)?;
    let settings = cfg.job_settings();
    let mut doc = read_document(input)?;

    let mut removed = 0;
    for job in &preset.jobs {
        let outcome = run_job(&mut doc, job, &settings)?;
        if let Some(label) = &job.label {
            writeln!(out, "# {label}:")?;
        }
        writeln!(out, "{}", outcome.listing)?;
        removed += outcome.removed;
    }
    tracing::info!(preset = name, jobs = preset.jobs.len(), removed, "preset finished");

    if let Some(path) = rewrite {
        write_document(&doc, path)?;
    }
    Ok(())
}
