//! Blocking HTTP transport.

use std::time::Duration;

use tracing::debug;

use crate::config::HttpConfig;
use crate::error::{Result, VoyagerError};

/// Status plus raw body bytes. Decompression is the transport's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes one GET. Implementations must not retry.
pub trait Requester {
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<RawResponse>;
}

/// [`Requester`] over `reqwest::blocking`. Gzip is negotiated and decoded
/// by reqwest.
pub struct HttpRequester {
    client: reqwest::blocking::Client,
}

fn transport_error(err: reqwest::Error) -> VoyagerError {
    VoyagerError::RequestFailed {
        status: err.status().map(|s| s.as_u16()),
        message: err.to_string(),
    }
}

impl HttpRequester {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(transport_error)?;
        Ok(Self { client })
    }
}

impl Requester for HttpRequester {
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<RawResponse> {
        debug!(url, "GET");
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(transport_error)?.to_vec();
        debug!(status, bytes = body.len(), "response received");

        Ok(RawResponse { status, body })
    }
}
