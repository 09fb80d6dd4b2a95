use super::headers::default_headers;
use super::Renderer;
use crate::error::FetchError;
use crate::types::FetchConfig;
use reqwest::blocking::Client;
use reqwest::redirect;
use std::time::Duration;
use url::Url;

const POOL_IDLE_TIMEOUT_SEC: u64 = 90;

/// Plain HTTP GET. Scripts are not executed, so pages that build their DOM
/// client-side come back as served.
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(config)?,
        })
    }
}

pub(super) fn build_client(config: &FetchConfig) -> Result<Client, FetchError> {
    Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(Duration::from_millis(config.timeout_ms))
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .default_headers(default_headers(&config.user_agent))
        .build()
        .map_err(|e| FetchError::Unavailable(format!("failed to build HTTP client: {e}")))
}

impl Renderer for HttpRenderer {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch_and_render(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| request_error(url, e))
    }
}

pub(super) fn request_error(url: &Url, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::network(url.as_str(), err)
    }
}
