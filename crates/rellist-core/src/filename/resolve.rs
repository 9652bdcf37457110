//! Resolution of relative hrefs against a page base URL.

use url::Url;

use crate::RellistError;

/// Parses a base URL given on the command line or in config.
pub fn parse_base_url(raw: &str) -> Result<Url, RellistError> {
    Url::parse(raw).map_err(|source| RellistError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}

/// Joins `href` onto `base` when one is given; otherwise returns `href` as is.
///
/// A join failure keeps the raw href and logs a warning.
pub fn resolve_href(href: &str, base: Option<&Url>) -> String {
    let Some(base) = base else {
        return href.to_string();
    };
    match base.join(href) {
        Ok(url) => url.to_string(),
        Err(err) => {
            tracing::warn!(href, %err, "could not resolve href against base URL; keeping it raw");
            href.to_string()
        }
    }
}
