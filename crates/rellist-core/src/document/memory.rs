//! Hand-built document tree for tests and fixtures.

use std::collections::HashSet;

use super::{Anchor, Document};

/// Handle to a node of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryNode(usize);

#[derive(Debug, Clone)]
struct MemoryAnchor {
    node: MemoryNode,
    href: Option<String>,
    text: String,
    /// Innermost first: cell, row, body.
    ancestors: Vec<MemoryNode>,
}

/// A listing page shaped like a release-assets table: a body holding rows,
/// each row holding a cell, each cell holding one or more anchors.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    body: MemoryNode,
    anchors: Vec<MemoryAnchor>,
    detached: HashSet<MemoryNode>,
    next_node: usize,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            body: MemoryNode(0),
            anchors: Vec::new(),
            detached: HashSet::new(),
            next_node: 1,
        }
    }

    fn alloc(&mut self) -> MemoryNode {
        let node = MemoryNode(self.next_node);
        self.next_node += 1;
        node
    }

    /// Appends a row holding a single anchor.
    pub fn row(self, href: &str, text: &str) -> Self {
        self.row_with(&[(href, text)])
    }

    /// Appends a row whose one cell holds every `(href, text)` anchor given.
    pub fn row_with(mut self, links: &[(&str, &str)]) -> Self {
        let row = self.alloc();
        let cell = self.alloc();
        for (href, text) in links {
            let node = self.alloc();
            self.anchors.push(MemoryAnchor {
                node,
                href: Some(href.to_string()),
                text: text.to_string(),
                ancestors: vec![cell, row, self.body],
            });
        }
        self
    }

    /// Appends an anchor with no `href` attribute.
    pub fn bare_anchor(mut self, text: &str) -> Self {
        let row = self.alloc();
        let cell = self.alloc();
        let node = self.alloc();
        self.anchors.push(MemoryAnchor {
            node,
            href: None,
            text: text.to_string(),
            ancestors: vec![cell, row, self.body],
        });
        self
    }

    fn is_attached(&self, anchor: &MemoryAnchor) -> bool {
        !self.detached.contains(&anchor.node)
            && !anchor.ancestors.iter().any(|a| self.detached.contains(a))
    }

    /// Number of anchors (with or without `href`) still attached.
    pub fn attached_len(&self) -> usize {
        self.anchors.iter().filter(|a| self.is_attached(a)).count()
    }
}

impl Document for MemoryDocument {
    type Node = MemoryNode;

    fn anchors(&self) -> Vec<(MemoryNode, Anchor)> {
        self.anchors
            .iter()
            .filter(|a| self.is_attached(a))
            .filter_map(|a| {
                let href = a.href.clone()?;
                Some((
                    a.node,
                    Anchor {
                        href,
                        text: a.text.clone(),
                    },
                ))
            })
            .collect()
    }

    fn remove_rows(&mut self, nodes: &[MemoryNode], levels: usize) -> usize {
        let targets: Vec<(MemoryNode, Vec<MemoryNode>)> = nodes
            .iter()
            .filter_map(|node| {
                let anchor = self.anchors.iter().find(|a| a.node == *node)?;
                if levels == 0 {
                    return Some((anchor.node, anchor.ancestors.clone()));
                }
                let target = *anchor.ancestors.get(levels - 1)?;
                Some((target, anchor.ancestors[levels..].to_vec()))
            })
            .collect();

        let mut removed = 0;
        for (target, above) in targets {
            let attached = !self.detached.contains(&target)
                && !above.iter().any(|a| self.detached.contains(a));
            if attached {
                self.detached.insert(target);
                removed += 1;
            }
        }
        removed
    }
}
