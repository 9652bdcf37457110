//! Document abstraction: the page being scanned is passed in explicitly
//! instead of being read from an ambient global.
//!
//! Two implementations live here: [`HtmlDocument`] over a parsed HTML page and
//! [`MemoryDocument`], a hand-built tree used by tests and fixtures.

mod html;
mod memory;

pub use html::HtmlDocument;
pub use memory::{MemoryDocument, MemoryNode};

use std::fmt;

/// A hyperlink element as read from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Raw `href` attribute value.
    pub href: String,
    /// Visible label text, untrimmed.
    pub text: String,
}

/// An anchor that matched a pattern, plus the handle it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedAnchor<N> {
    pub node: N,
    pub anchor: Anchor,
}

/// Tree-query capability over a page.
pub trait Document {
    /// Opaque handle to an anchor node. Stays valid until the next mutation.
    type Node: Copy + Eq + fmt::Debug;

    /// Every anchor carrying an `href` attribute that is still attached to
    /// the document, in document order.
    fn anchors(&self) -> Vec<(Self::Node, Anchor)>;

    /// Detaches the `levels`-th ancestor of each node (`0` is the anchor
    /// itself, `2` is `parentNode.parentNode`). All targets are resolved
    /// before anything is detached. Returns how many rows were removed;
    /// a row shared by several anchors counts once.
    fn remove_rows(&mut self, nodes: &[Self::Node], levels: usize) -> usize;
}

/// Anchors whose raw `href` contains `pattern`, in document order.
///
/// Plain, case-sensitive substring containment. No matches is an empty vec.
pub fn select_anchors<D>(doc: &D, pattern: &str) -> Vec<MatchedAnchor<D::Node>>
where
    D: Document + ?Sized,
{
    doc.anchors()
        .into_iter()
        .filter(|(_, anchor)| anchor.href.contains(pattern))
        .map(|(node, anchor)| MatchedAnchor { node, anchor })
        .collect()
}
