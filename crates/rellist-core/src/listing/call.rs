//! Call-literal rendering: `Record("name", "url")`.

use super::ListingEntry;

/// Escapes quotes, backslashes and control characters so the field stays a
/// single quoted literal on one line.
pub(super) fn quote(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    out.push('"');
    for c in field.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

pub(super) fn call_literal(record: &str, entry: &ListingEntry) -> String {
    format!("{}({}, {})", record, quote(&entry.name), quote(&entry.url))
}

pub(super) fn join_calls(record: &str, separator: &str, entries: &[ListingEntry]) -> String {
    entries
        .iter()
        .map(|e| call_literal(record, e))
        .collect::<Vec<_>>()
        .join(separator)
}
