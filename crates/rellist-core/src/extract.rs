//! Pure extraction: document in, listing entries out.
//!
//! Nothing here mutates the document. Callers that want processed rows gone
//! pass [`Extraction::nodes`] to [`Document::remove_rows`] afterwards.

use url::Url;

use crate::document::{select_anchors, Document};
use crate::filename::{entry_name, resolve_href, FilenameStrategy};
use crate::listing::ListingEntry;

/// What to match and how to name it.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Substring the raw href must contain.
    pub pattern: String,
    /// Prepended verbatim to every filename.
    pub prefix: String,
    pub strategy: FilenameStrategy,
    /// Resolves relative hrefs when set; raw hrefs are emitted otherwise.
    pub base_url: Option<Url>,
}

/// Entries in document order, with the node each one came from.
#[derive(Debug, Clone)]
pub struct Extraction<N> {
    pub entries: Vec<ListingEntry>,
    pub nodes: Vec<N>,
}

impl<N> Extraction<N> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn extract<D>(doc: &D, opts: &ExtractOptions) -> Extraction<D::Node>
where
    D: Document + ?Sized,
{
    let matched = select_anchors(doc, &opts.pattern);
    let mut entries = Vec::with_capacity(matched.len());
    let mut nodes = Vec::with_capacity(matched.len());

    for m in matched {
        let filename = opts.strategy.filename(&m.anchor);
        entries.push(ListingEntry {
            name: entry_name(&opts.prefix, &filename),
            url: resolve_href(&m.anchor.href, opts.base_url.as_ref()),
        });
        nodes.push(m.node);
    }

    if entries.is_empty() {
        tracing::debug!(pattern = %opts.pattern, "no anchors matched");
    } else {
        tracing::debug!(pattern = %opts.pattern, matched = entries.len(), "extracted entries");
    }

    Extraction { entries, nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MemoryDocument, MemoryNode};
    use crate::filename::parse_base_url;

    fn opts(pattern: &str, prefix: &str, strategy: FilenameStrategy) -> ExtractOptions {
        ExtractOptions {
            pattern: pattern.to_string(),
            prefix: prefix.to_string(),
            strategy,
            base_url: None,
        }
    }

    #[test]
    fn path_tail_with_prefix() {
        let href = "https://example.com/rel/v1/all2/foo--as_stats2.csv";
        let doc = MemoryDocument::new().row(href, "ignored");
        let ex = extract(&doc, &opts("--as_stats2.csv", "all2/", FilenameStrategy::PathTail));
        assert_eq!(ex.entries, vec![ListingEntry::new("all2/foo--as_stats2.csv", href)]);
        assert_eq!(ex.nodes.len(), 1);
    }

    #[test]
    fn label_with_base_url() {
        let doc = MemoryDocument::new()
            .row("/o/r/releases/download/raw-data/rrc00--rib.20230623.0000.bz2", " rrc00--rib.20230623.0000.bz2 ")
            .row("/o/r/releases/download/raw-data/irrs.tar.zst", "irrs.tar.zst");
        let mut o = opts("0000.", "../data/ribs/", FilenameStrategy::Label);
        o.base_url = Some(parse_base_url("https://github.com").unwrap());

        let ex = extract(&doc, &o);
        assert_eq!(
            ex.entries,
            vec![ListingEntry::new(
                "../data/ribs/rrc00--rib.20230623.0000.bz2",
                "https://github.com/o/r/releases/download/raw-data/rrc00--rib.20230623.0000.bz2",
            )]
        );
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let doc = MemoryDocument::new().row("/a.txt", "a.txt");
        let ex = extract(&doc, &opts(".csv", "", FilenameStrategy::PathTail));
        assert!(ex.is_empty());
        assert!(ex.nodes.is_empty());
    }

    #[test]
    fn duplicates_pass_through() {
        let doc = MemoryDocument::new()
            .row("/v1/same.csv", "same.csv")
            .row("/v2/same.csv", "same.csv");
        let ex = extract(&doc, &opts(".csv", "", FilenameStrategy::PathTail));
        let names: Vec<&str> = ex.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["same.csv", "same.csv"]);
    }

    #[test]
    fn removal_after_extraction_neither_skips_nor_duplicates() {
        let mut doc = MemoryDocument::new()
            .row("/r/a--0000.bz2", "a")
            .row("/r/keep.txt", "keep")
            .row_with(&[("/r/b--0000.bz2", "b"), ("/r/c--0000.bz2", "c")])
            .row("/r/d--0000.bz2", "d");

        let ex = extract(&doc, &opts("0000.", "", FilenameStrategy::Label));
        let names: Vec<&str> = ex.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);

        let nodes: Vec<MemoryNode> = ex.nodes.clone();
        assert_eq!(doc.remove_rows(&nodes, 2), 3);

        // A second run only sees what was never matched.
        assert!(extract(&doc, &opts("0000.", "", FilenameStrategy::Label)).is_empty());
        assert_eq!(extract(&doc, &opts("", "", FilenameStrategy::Label)).len(), 1);
    }
}
