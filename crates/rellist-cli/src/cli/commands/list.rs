//! `rellist list <input> --pattern <p>` – print one listing.

use anyhow::Result;
use rellist_core::config::RellistConfig;
use std::io::Write;
use rellist_core::job::{run_job, ListingJob};

use super::input::{read_document, write_document};
use crate::cli::ListArgs;

fn job_from_args(args: &ListArgs) -> ListingJob {
    ListingJob {
        label: None,
        pattern: args.pattern.clone(),
        prefix: args.prefix.clone(),
        strategy: args.strategy,
        format: args.format,
        base_url: args.base_url.clone(),
        assign: args.assign.clone(),
        docstring: args.docstring.clone(),
        remove_rows: args.remove_rows,
    }
}

/// Writes the listing to `out`; the rewritten page, if asked for, goes to `--rewrite`.
pub fn run_list<W: Write>(cfg: &RellistConfig, args: &ListArgs, out: &mut W) -> Result<()> {
    let mut settings = cfg.job_settings();
    if let Some(record) = &args.record {
        settings.record = record.clone();
    }
    if let Some(separator) = &args.separator {
        settings.separator = separator.clone();
    }
    if let Some(levels) = args.levels {
        settings.row_levels = levels;
    }

    let mut doc = read_document(&args.input)?;
    let outcome = run_job(&mut doc, &job_from_args(args), &settings)?;
    writeln!(out, "{}", outcome.listing)?;

    if outcome.removed > 0 {
        tracing::info!("removed {} row(s)", outcome.removed);
    }
    if let Some(path) = &args.rewrite {
        write_document(&doc, path)?;
    }
    Ok(())
}
