use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{AckError, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The sole point of network I/O.
///
/// One connection-reusing HTTP client shared across the whole session.
/// Every call enforces the control plane's exact-200 contract and decodes
/// the body as JSON; callers treat all three failure classes (network,
/// status, decode) the same way, as transient.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
}

impl Transport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Build with a custom per-request timeout. `/v1/wait_action` holds
    /// the request open until the action applies, so callers expecting
    /// slow application may want a larger budget; a timed-out attempt is
    /// retried like any other network failure.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// `GET url`, expecting 200 and a JSON body.
    pub fn get(&self, url: &str) -> Result<Value> {
        let body = self.execute(self.http.get(url), url)?;
        decode(url, &body)
    }

    /// `POST url` with a JSON body and `Content-Type: application/json`,
    /// expecting 200 and a JSON body back.
    pub fn post<T: Serialize>(&self, url: &str, body: &T) -> Result<Value> {
        let body = self.post_text(url, body)?;
        decode(url, &body)
    }

    /// Like [`post`](Self::post) but returns the raw body, for the one
    /// endpoint whose 200 response may legitimately be empty.
    pub fn post_text<T: Serialize>(&self, url: &str, body: &T) -> Result<String> {
        self.execute(self.http.post(url).json(body), url)
    }

    fn execute(&self, request: RequestBuilder, url: &str) -> Result<String> {
        info!("request {url}");
        let response = request.send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(AckError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text()?)
    }
}

fn decode(url: &str, body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|source| AckError::Decode {
        url: url.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
