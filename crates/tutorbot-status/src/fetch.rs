//! Fetch abstraction for the status endpoint.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// JSON body of the status endpoint.
///
/// Extra fields (the backend also sends a timestamp) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusPayload {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_page_url: Option<String>,
}

/// Injected fetch seam so the poller can run without a real network.
pub trait StatusFetch {
    /// Performs one status fetch. Any error (transport, non-success
    /// status, bad body) is mapped to `Unknown` by the caller.
    fn fetch(&self) -> impl Future<Output = Result<StatusPayload>> + Send;
}

/// Real fetcher: a GET with credentials (cookies) included.
pub struct HttpStatusFetch {
    http: reqwest::Client,
    url: Url,
}

impl HttpStatusFetch {
    /// Creates a fetcher for the given endpoint URL.
    pub fn new(url: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("build status http client")?;
        Ok(Self { http, url })
    }
}

impl StatusFetch for HttpStatusFetch {
    async fn fetch(&self) -> Result<StatusPayload> {
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .context("status request failed")?
            .error_for_status()
            .context("status endpoint returned an error")?;

        response.json().await.context("decode status payload")
    }
}
