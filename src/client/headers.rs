//! Request headers.
//!
//! Every value comes from [`Config`]; nothing here is a hidden global.

use crate::config::Config;
use crate::encoder::{profile_url, search_referer, SearchArgs};

pub type Headers = Vec<(String, String)>;

fn push(headers: &mut Headers, name: &str, value: impl Into<String>) {
    headers.push((name.to_string(), value.into()));
}

/// Headers sent with every request: browser identity and session.
pub fn common(config: &Config) -> Headers {
    let http = &config.http;
    let mut headers = Vec::with_capacity(12);
    push(&mut headers, "User-Agent", http.user_agent.as_str());
    push(&mut headers, "Accept", http.accept.as_str());
    push(&mut headers, "Accept-Language", http.accept_language.as_str());
    push(&mut headers, "X-Li-Lang", http.li_lang.as_str());
    push(&mut headers, "X-Restli-Protocol-Version", http.restli_protocol_version.as_str());
    push(&mut headers, "Csrf-Token", config.auth.csrf_token.as_str());
    push(&mut headers, "Cookie", config.auth.cookie_header());
    headers
}

pub fn profile(config: &Config, public_identifier: &str) -> Headers {
    let mut headers = common(config);
    push(&mut headers, "Referer", profile_url(public_identifier));
    push(
        &mut headers,
        "X-Li-Page-Instance",
        format!("urn:li:page:d_flagship3_profile_view_base;{}", public_identifier),
    );
    push(&mut headers, "X-Li-Pem-Metadata", "Voyager - Profile");
    push(&mut headers, "X-Li-Track", config.http.li_track.as_str());
    headers
}

pub fn search(config: &Config, args: &SearchArgs) -> Headers {
    let mut headers = common(config);
    push(&mut headers, "Referer", search_referer(args));
    push(&mut headers, "X-Li-Page-Instance", config.http.search_page_instance.as_str());
    push(&mut headers, "X-Li-Pem-Metadata", "Voyager - People SRP=search-results");
    push(&mut headers, "X-Li-Track", config.http.li_track.as_str());
    headers
}

/// Value of the first header named `name`, case-insensitively.
pub fn find<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
