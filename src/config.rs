//! Client configuration.
//!
//! Loaded from TOML, then overlaid with credentials from the environment.
//!
//! ```toml
//! [auth]
//! li_at = "AQEDAR..."
//! csrf_token = "ajax:123"
//! jsession_id = "ajax:123"
//!
//! [http]
//! timeout_secs = 20
//!
//! [endpoints]
//! profile_query_id = "voyagerIdentityDashProfiles.<hash>"
//! search_filter_layout = "key-value"
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::encoder::FilterLayout;
use crate::error::{Result, VoyagerError};

pub const ENV_LI_AT: &str = "LI_AT_COOKIE";
pub const ENV_CSRF: &str = "CSRF_TOKEN";
pub const ENV_JSESSIONID: &str = "JSESSIONID_TOKEN";

pub const DEFAULT_BASE_URL: &str = "https://www.linkedin.com/voyager/api/graphql";
pub const DEFAULT_SEARCH_QUERY_ID: &str =
    "voyagerSearchDashClusters.7cdf88d3366ad02cc5a3862fb9a24085";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT: &str = "application/vnd.linkedin.normalized+json+2.1";
pub const DEFAULT_LI_TRACK: &str = r#"{"clientVersion":"1.13.35368","mpVersion":"1.13.35368","osName":"web","timezoneOffset":-7,"timezone":"America/Los_Angeles","deviceFormFactor":"DESKTOP","mpName":"voyager-web","displayDensity":2,"displayWidth":1920,"displayHeight":1080}"#;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub auth: AuthCredentials,
    pub http: HttpConfig,
    pub endpoints: EndpointConfig,
}

/// Session credentials. `Debug` never prints the secrets.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthCredentials {
    pub li_at: String,
    pub csrf_token: String,
    /// Optional. Sent as `JSESSIONID="..."` in the cookie header.
    pub jsession_id: String,
}

impl AuthCredentials {
    /// `li_at` and the CSRF token are both required for any request.
    pub fn is_complete(&self) -> bool {
        !self.li_at.is_empty() && !self.csrf_token.is_empty()
    }

    pub fn cookie_header(&self) -> String {
        format!("li_at={}; JSESSIONID=\"{}\"", self.li_at, self.jsession_id)
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("li_at", &redact(&self.li_at))
            .field("csrf_token", &redact(&self.csrf_token))
            .field("jsession_id", &redact(&self.jsession_id))
            .finish()
    }
}

/// Transport settings and the browser-session header values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub base_url: String,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub li_lang: String,
    pub restli_protocol_version: String,
    pub li_track: String,
    pub search_page_instance: String,
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: "en-GB,en-US;q=0.9,en;q=0.8".to_string(),
            li_lang: "en_US".to_string(),
            restli_protocol_version: "2.0.0".to_string(),
            li_track: DEFAULT_LI_TRACK.to_string(),
            search_page_instance: "urn:li:page:d_flagship3_search_srp_people".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Persisted query identifiers and per-endpoint encoding choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub search_query_id: String,
    /// Has no default; profile lookups fail until it is set.
    pub profile_query_id: String,
    pub search_filter_layout: FilterLayout,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            search_query_id: DEFAULT_SEARCH_QUERY_ID.to_string(),
            profile_query_id: String::new(),
            search_filter_layout: FilterLayout::KeyValue,
        }
    }
}

impl Config {
    /// Parse a TOML file. Missing sections and keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| VoyagerError::Config(e.to_string()))
    }

    /// Overlay credentials from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay credentials from `lookup`. Empty values are ignored.
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = get(ENV_LI_AT) {
            self.auth.li_at = v;
        }
        if let Some(v) = get(ENV_CSRF) {
            self.auth.csrf_token = v;
        }
        if let Some(v) = get(ENV_JSESSIONID) {
            self.auth.jsession_id = v;
        }
        self
    }
}
