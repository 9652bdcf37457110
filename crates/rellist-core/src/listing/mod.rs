//! Listing serializer: turns extracted entries into the text that gets
//! pasted into a data-definition file.

mod call;

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::RellistError;

/// Default record name wrapped around each entry.
pub const DEFAULT_RECORD: &str = "CsvFile";
/// Default separator between rendered entries.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// One extracted `(filename, url)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    pub url: String,
}

impl ListingEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStyle {
    /// `Record("name", "url")` literals joined by a separator.
    #[default]
    Call,
    /// JSON array of `{"name", "url"}` objects.
    Json,
}

impl FromStr for ListingStyle {
    type Err = RellistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(ListingStyle::Call),
            "json" => Ok(ListingStyle::Json),
            other => Err(RellistError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ListingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingStyle::Call => write!(f, "call"),
            ListingStyle::Json => write!(f, "json"),
        }
    }
}

/// Everything that shapes the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFormat {
    pub style: ListingStyle,
    pub record: String,
    pub separator: String,
    /// Wraps a call listing as `<assign> = [<listing>]`.
    pub assign: Option<String>,
    /// Appended as a `"""<docstring>"""` line after a call listing.
    pub docstring: Option<String>,
}

impl Default for ListingFormat {
    fn default() -> Self {
        Self {
            style: ListingStyle::Call,
            record: DEFAULT_RECORD.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            assign: None,
            docstring: None,
        }
    }
}

/// Renders `entries` according to `format`.
///
/// No entries renders as `""` in call style (plus any wrapping) and `[]` in
/// JSON style.
pub fn render(entries: &[ListingEntry], format: &ListingFormat) -> Result<String> {
    match format.style {
        ListingStyle::Json => {
            if format.assign.is_some() || format.docstring.is_some() {
                tracing::debug!("assignment/docstring wrapping ignored for json listings");
            }
            serde_json::to_string(entries).context("serialize listing as JSON")
        }
        ListingStyle::Call => {
            let body = call::join_calls(&format.record, &format.separator, entries);
            let mut out = match &format.assign {
                Some(name) => format!("{name} = [{body}]"),
                None => body,
            };
            if let Some(doc) = &format.docstring {
                out.push_str("\n\"\"\"");
                out.push_str(doc);
                out.push_str("\"\"\"");
            }
            Ok(out)
        }
    }
}
