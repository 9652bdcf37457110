//! Reading the saved page and writing it back after row removal.

use anyhow::{Context, Result};
use rellist_core::document::HtmlDocument;
use std::io::Read;
use std::path::Path;

/// Parses the page at `path`, or stdin when `path` is `-`.
pub fn read_document(path: &Path) -> Result<HtmlDocument> {
    let source = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read page from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read page: {}", path.display()))?
    };
    tracing::debug!(bytes = source.len(), "parsing page from {}", path.display());
    Ok(HtmlDocument::parse(&source))
}

pub fn write_document(doc: &HtmlDocument, path: &Path) -> Result<()> {
    std::fs::write(path, doc.to_html())
        .with_context(|| format!("write rewritten page: {}", path.display()))?;
    tracing::info!("wrote rewritten page to {}", path.display());
    Ok(())
}
