//! [`Document`] over a page parsed with `scraper`.

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::{ElementRef, Html};

use super::{Anchor, Document};

/// A parsed HTML page.
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Serializes the document, including any removals made so far.
    pub fn to_html(&self) -> String {
        self.html.html()
    }

    /// True if `id` can still be reached from the document root.
    fn is_attached(&self, id: NodeId) -> bool {
        let root = self.html.tree.root().id();
        match self.html.tree.get(id) {
            Some(node) => node.ancestors().any(|a| a.id() == root),
            None => false,
        }
    }

    fn row_of(&self, id: NodeId, levels: usize) -> Option<NodeId> {
        let node = self.html.tree.get(id)?;
        if levels == 0 {
            return Some(node.id());
        }
        node.ancestors().nth(levels - 1).map(|a| a.id())
    }
}

impl Document for HtmlDocument {
    type Node = NodeId;

    fn anchors(&self) -> Vec<(NodeId, Anchor)> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "a")
            .filter_map(|el| {
                let href = el.value().attr("href")?;
                Some((
                    el.id(),
                    Anchor {
                        href: href.to_string(),
                        text: el.text().collect(),
                    },
                ))
            })
            .collect()
    }

    fn remove_rows(&mut self, nodes: &[NodeId], levels: usize) -> usize {
        // Resolve every row before detaching anything.
        let rows: Vec<NodeId> = nodes
            .iter()
            .filter_map(|id| self.row_of(*id, levels))
            .collect();

        let mut seen = HashSet::new();
        let mut removed = 0;
        for row in rows {
            if !seen.insert(row) || !self.is_attached(row) {
                continue;
            }
            if let Some(mut node) = self.html.tree.get_mut(row) {
                node.detach();
                removed += 1;
            }
        }
        tracing::debug!(removed, levels, "detached rows from html document");
        removed
    }
}
