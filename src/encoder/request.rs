//! Request URL and referer assembly.
//!
//! Standard parameters go through normal form encoding. The variables
//! fragment is appended raw: its parentheses and colons must reach the
//! server unescaped.

use url::Url;

use super::variables::SearchArgs;
use super::writer::escape_text;
use crate::error::EncodingError;

const SEARCH_REFERER_BASE: &str = "https://www.linkedin.com/search/results/people/";
const PROFILE_URL_BASE: &str = "https://www.linkedin.com/in/";

/// Build `<base>?includeWebMetadata=true&queryId=<id>&variables=<fragment>`.
pub fn request_url(base: &str, query_id: &str, variables: &str) -> Result<String, EncodingError> {
    let mut url = Url::parse(base).map_err(|e| EncodingError::InvalidBaseUrl(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(EncodingError::InvalidBaseUrl(base.to_string()));
    }
    if query_id.is_empty() {
        return Err(EncodingError::MissingField("queryId"));
    }

    url.query_pairs_mut()
        .append_pair("includeWebMetadata", "true")
        .append_pair("queryId", query_id);

    Ok(format!("{}&variables={}", url, variables))
}

/// Public profile page for an identifier.
pub fn profile_url(public_identifier: &str) -> String {
    format!("{}{}/", PROFILE_URL_BASE, public_identifier)
}

/// Referer matching the search results page a browser would be on.
///
/// The network filter is a literal JSON array (`["F","O"]`), not escaped.
pub fn search_referer(args: &SearchArgs) -> String {
    let mut parts = vec![format!(
        "keywords={}",
        escape_text(args.keywords.as_deref().unwrap_or_default())
    )];

    if let Some(network) = args.filter_values("network").filter(|v| !v.is_empty()) {
        let quoted: Vec<String> = network.iter().map(|n| format!("\"{}\"", n)).collect();
        parts.push(format!("network=[{}]", quoted.join(",")));
    }
    parts.push(format!(
        "origin={}",
        args.origin.as_deref().unwrap_or(super::variables::DEFAULT_ORIGIN)
    ));

    format!("{}?{}", SEARCH_REFERER_BASE, parts.join("&"))
}
