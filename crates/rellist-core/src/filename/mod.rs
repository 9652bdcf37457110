//! Filename derivation for listing entries.
//!
//! A release page either links assets by descriptive path (the filename is
//! the path tail) or through opaque download endpoints (the filename is the
//! anchor label). Neither is guessed; callers pick a [`FilenameStrategy`].

mod label;
mod path;
mod resolve;

pub use label::label_text;
pub use path::path_tail;
pub use resolve::{parse_base_url, resolve_href};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::Anchor;
use crate::RellistError;

/// Where an entry's filename comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilenameStrategy {
    /// Text after the last `/` of the raw href.
    #[default]
    PathTail,
    /// Trimmed visible label of the anchor.
    Label,
}

impl FilenameStrategy {
    pub fn filename(&self, anchor: &Anchor) -> String {
        match self {
            FilenameStrategy::PathTail => path_tail(&anchor.href).to_string(),
            FilenameStrategy::Label => label_text(&anchor.text),
        }
    }
}

impl FromStr for FilenameStrategy {
    type Err = RellistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path-tail" => Ok(FilenameStrategy::PathTail),
            "label" => Ok(FilenameStrategy::Label),
            other => Err(RellistError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for FilenameStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilenameStrategy::PathTail => write!(f, "path-tail"),
            FilenameStrategy::Label => write!(f, "label"),
        }
    }
}

/// `prefix + filename`, with no normalization.
pub fn entry_name(prefix: &str, filename: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + filename.len());
    name.push_str(prefix);
    name.push_str(filename);
    name
}
