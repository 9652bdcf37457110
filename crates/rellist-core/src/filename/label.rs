//! Filename taken from an anchor's visible label.

/// Trims the label and collapses inner whitespace runs to a single space,
/// the way the label renders on the page.
pub fn label_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
