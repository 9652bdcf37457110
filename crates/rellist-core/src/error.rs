//! Typed failures surfaced by the core library.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RellistError {
    /// No preset with this name exists in the loaded config.
    #[error("unknown preset `{0}`; run `rellist presets` to list available presets")]
    UnknownPreset(String),

    /// Filename strategy name not recognised (expected `path-tail` or `label`).
    #[error("unknown filename strategy `{0}` (expected `path-tail` or `label`)")]
    UnknownStrategy(String),

    /// Listing style name not recognised (expected `call` or `json`).
    #[error("unknown listing format `{0}` (expected `call` or `json`)")]
    UnknownFormat(String),

    /// Base URL given for href resolution could not be parsed.
    #[error("invalid base URL `{url}`")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
