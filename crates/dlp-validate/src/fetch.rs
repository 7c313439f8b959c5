//! Reachability probe used by the license check.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::error::FetchError;

/// Default bound on a single URL probe.
pub const DEFAULT_URL_TIMEOUT: Duration = Duration::from_secs(10);

/// What a completed fetch returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The body holds something other than whitespace.
    Content,
    /// The body is empty or whitespace only.
    Empty,
}

/// Opens a URL and reports whether it served a document.
pub trait UrlFetcher: Send + Sync + fmt::Debug {
    fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError>;
}

/// Blocking HTTP fetcher with a bounded timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, url: &str, source: reqwest::Error) -> FetchError {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_owned(),
                timeout: self.timeout,
            }
        } else {
            FetchError::Connect {
                url: url.to_owned(),
                source,
            }
        }
    }
}

impl UrlFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        debug!(url, "Probing license URL");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, concat!("dlp-validate/", env!("CARGO_PKG_VERSION")))
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| self.classify(url, e))?;

        let body = response.bytes().map_err(|source| {
            if source.is_timeout() {
                self.classify(url, source)
            } else {
                FetchError::Read {
                    url: url.to_owned(),
                    source,
                }
            }
        })?;

        if body.iter().all(u8::is_ascii_whitespace) {
            Ok(FetchOutcome::Empty)
        } else {
            Ok(FetchOutcome::Content)
        }
    }
}
