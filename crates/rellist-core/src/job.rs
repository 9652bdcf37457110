//! A listing job: extract, render, then optionally remove processed rows.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::extract::{extract, ExtractOptions};
use crate::filename::{parse_base_url, FilenameStrategy};
use crate::listing::{render, ListingFormat, ListingStyle};

/// One pattern to list, as stored in a preset or built from CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingJob {
    /// Printed as a `// <label>:` line before the listing when running a preset.
    #[serde(default)]
    pub label: Option<String>,
    pub pattern: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub strategy: FilenameStrategy,
    #[serde(default)]
    pub format: ListingStyle,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub assign: Option<String>,
    #[serde(default)]
    pub docstring: Option<String>,
    /// Remove each matched anchor's row after the listing is rendered.
    #[serde(default)]
    pub remove_rows: bool,
}

/// Settings shared by every job of a run (from config, overridable by flags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSettings {
    pub record: String,
    pub separator: String,
    /// Ancestor depth of the row removed for each anchor.
    pub row_levels: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub listing: String,
    pub matched: usize,
    pub removed: usize,
}

impl ListingJob {
    fn extract_options(&self) -> Result<ExtractOptions> {
        let base_url = match &self.base_url {
            Some(raw) => Some(parse_base_url(raw)?),
            None => None,
        };
        Ok(ExtractOptions {
            pattern: self.pattern.clone(),
            prefix: self.prefix.clone(),
            strategy: self.strategy,
            base_url,
        })
    }

    fn listing_format(&self, settings: &JobSettings) -> ListingFormat {
        ListingFormat {
            style: self.format,
            record: settings.record.clone(),
            separator: settings.separator.clone(),
            assign: self.assign.clone(),
            docstring: self.docstring.clone(),
        }
    }
}

/// Runs `job` against `doc`.
///
/// The listing is fully rendered before any row is removed, so a removal
/// can never change what was listed.
pub fn run_job<D: Document>(doc: &mut D, job: &ListingJob, settings: &JobSettings) -> Result<JobOutcome> {
    let opts = job.extract_options()?;
    let extraction = extract(&*doc, &opts);
    let listing = render(&extraction.entries, &job.listing_format(settings))?;

    let removed = if job.remove_rows {
        doc.remove_rows(&extraction.nodes, settings.row_levels)
    } else {
        0
    };

    tracing::info!(
        pattern = %job.pattern,
        matched = extraction.len(),
        removed,
        "listing job finished"
    );

    Ok(JobOutcome {
        listing,
        matched: extraction.len(),
        removed,
    })
}
