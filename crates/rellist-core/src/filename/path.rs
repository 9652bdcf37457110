//! Filename extraction from the tail of an href.

/// Everything after the last `/` of `href`.
///
/// An href without `/` is returned whole; a trailing `/` yields `""`.
/// Query strings and fragments are kept.
pub fn path_tail(href: &str) -> &str {
    match href.rfind('/') {
        Some(i) => &href[i + 1..],
        None => href,
    }
}
