//! HTTP facade: encode → request → decode → resolve.
//!
//! ```ignore
//! let client = Client::new(Config::default().with_env())?;
//! let page = client.search_profiles(&SearchArgs::new("investor").network(["F", "O"]))?;
//! ```

pub mod headers;
pub mod transport;

pub use transport::{HttpRequester, RawResponse, Requester};

use tracing::{debug, warn};

use crate::config::Config;
use crate::encoder::{profile_variables, request_url, search_variables, SearchArgs};
use crate::error::{EncodingError, Result, VoyagerError};
use crate::model::Profile;
use crate::resolve::{resolve_profile, resolve_search, SearchPage};
use crate::wire::Payload;

const MAX_ERROR_BODY: usize = 2048;

pub struct Client<R = HttpRequester> {
    config: Config,
    requester: R,
}

impl Client<HttpRequester> {
    pub fn new(config: Config) -> Result<Self> {
        let requester = HttpRequester::new(&config.http)?;
        Ok(Self { config, requester })
    }
}

impl<R: Requester> Client<R> {
    pub fn with_requester(config: Config, requester: R) -> Self {
        Self { config, requester }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The search request URL, with the configured filter layout applied.
    pub fn search_url(&self, args: &SearchArgs) -> Result<String> {
        let args = self.configured(args);
        let variables = search_variables(&args)?;
        Ok(request_url(
            &self.config.http.base_url,
            &self.config.endpoints.search_query_id,
            &variables,
        )?)
    }

    pub fn profile_request_url(&self, public_identifier: &str) -> Result<String> {
        let variables = profile_variables(public_identifier)?;
        Ok(request_url(
            &self.config.http.base_url,
            &self.config.endpoints.profile_query_id,
            &variables,
        )?)
    }

    /// Fetch and resolve one profile by public identifier.
    pub fn get_profile(&self, public_identifier: &str) -> Result<Profile> {
        self.ensure_auth()?;
        if public_identifier.trim().is_empty() {
            return Err(EncodingError::MissingField("publicIdentifier").into());
        }

        let url = self.profile_request_url(public_identifier)?;
        let headers = headers::profile(&self.config, public_identifier);
        let payload = self.fetch(&url, &headers)?;
        resolve_profile(&payload, public_identifier)
    }

    /// Run a people search and resolve every hit.
    pub fn search_profiles(&self, args: &SearchArgs) -> Result<SearchPage> {
        self.ensure_auth()?;
        let url = self.search_url(args)?;
        let headers = headers::search(&self.config, args);
        let payload = self.fetch(&url, &headers)?;
        let page = resolve_search(&payload)?;
        debug!(hits = page.len(), "search resolved");
        Ok(page)
    }

    fn configured(&self, args: &SearchArgs) -> SearchArgs {
        args.clone().layout(self.config.endpoints.search_filter_layout)
    }

    fn ensure_auth(&self) -> Result<()> {
        if self.config.auth.is_complete() {
            Ok(())
        } else {
            Err(VoyagerError::AuthMissing)
        }
    }

    fn fetch(&self, url: &str, headers: &[(String, String)]) -> Result<Payload> {
        let response = self.requester.get(url, headers)?;
        check_status(&response)?;
        Payload::from_slice(&response.body)
    }
}

fn truncate_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX_ERROR_BODY {
        return text.into_owned();
    }
    let mut end = MAX_ERROR_BODY;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// 200 passes; 401/403 and 429 get their own variants.
fn check_status(response: &RawResponse) -> Result<()> {
    let status = response.status;
    if status == 200 {
        return Ok(());
    }

    warn!(status, "request rejected");
    let body = truncate_body(&response.body);
    Err(match status {
        401 | 403 => VoyagerError::Unauthorized { status, body },
        429 => VoyagerError::RateLimited { status, body },
        _ => VoyagerError::RequestFailed {
            status: Some(status),
            message: body,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Canned {
        status: u16,
        body: &'static str,
        seen: RefCell<Vec<String>>,
    }

    impl Canned {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Requester for Canned {
        fn get(&self, url: &str, _headers: &[(String, String)]) -> Result<RawResponse> {
            self.seen.borrow_mut().push(url.to_string());
            Ok(RawResponse {
                status: self.status,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    fn authed() -> Config {
        let mut config = Config::default();
        config.auth.li_at = "AQED".into();
        config.auth.csrf_token = "ajax:1".into();
        config.endpoints.profile_query_id = "voyagerIdentityDashProfiles.test".into();
        config
    }

    #[test]
    fn test_auth_checked_before_request() {
        let client = Client::with_requester(Config::default(), Canned::new(200, "{}"));
        assert!(matches!(client.get_profile("jane-doe"), Err(VoyagerError::AuthMissing)));
        assert!(client.requester.seen.borrow().is_empty());
    }

    #[test]
    fn test_status_mapping() {
        for (status, check) in [
            (401u16, "unauthorized"),
            (403, "unauthorized"),
            (429, "rate limited"),
            (500, "request failed (status 500)"),
        ] {
            let client = Client::with_requester(authed(), Canned::new(status, "nope"));
            let err = client.get_profile("jane-doe").unwrap_err();
            assert!(
                err.to_string().starts_with(check),
                "status {} gave {}",
                status,
                err
            );
        }
    }

    #[test]
    fn test_search_url_uses_configured_layout() {
        let client = Client::with_requester(authed(), Canned::new(200, "{}"));
        let url = client
            .search_url(&SearchArgs::new("investor").network(["F", "O"]))
            .unwrap();
        assert!(url.contains(
            "queryParameters:List((key:network,value:List(F,O)),(key:resultType,value:List(PEOPLE)))"
        ));
        assert!(url.starts_with(
            "https://www.linkedin.com/voyager/api/graphql?includeWebMetadata=true&queryId=voyagerSearchDashClusters."
        ));
    }

    #[test]
    fn test_profile_requires_query_id() {
        let mut config = authed();
        config.endpoints.profile_query_id.clear();
        let client = Client::with_requester(config, Canned::new(200, "{}"));
        assert!(matches!(
            client.get_profile("jane-doe"),
            Err(VoyagerError::Encoding(EncodingError::MissingField("queryId")))
        ));
    }

    #[test]
    fn test_empty_search_page() {
        let client = Client::with_requester(authed(), Canned::new(200, r#"{"included": []}"#));
        let page = client.search_profiles(&SearchArgs::new("nobody")).unwrap();
        assert!(page.is_empty());
        assert_eq!(client.requester.seen.borrow().len(), 1);
    }

    #[test]
    fn test_truncate_body() {
        let long = "é".repeat(MAX_ERROR_BODY);
        let truncated = truncate_body(long.as_bytes());
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= MAX_ERROR_BODY + 3);
    }
}
