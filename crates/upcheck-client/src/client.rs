//! Status client implementation.

use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::error::{Error, Result};
use crate::types::CheckReport;

/// Default timeout for the status request, connection included.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent sent with every status request.
const DEFAULT_USER_AGENT: &str = "Nginx-Status";

/// Client for an upstream check status endpoint.
///
/// Issues exactly one GET per [`fetch`](StatusClient::fetch) call; there is
/// no retry logic and no connection reuse across invocations.
///
/// # Example
///
/// ```no_run
/// use upcheck_client::StatusClient;
///
/// # async fn example() -> upcheck_client::Result<()> {
/// let client = StatusClient::new("http://localhost:80/nginx/check?format=json")?;
/// let report = client.fetch().await?;
/// println!("{} servers", report.servers().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StatusClient {
    /// HTTP client.
    http: reqwest::Client,
    /// Status page URL.
    url: Url,
    /// Request timeout.
    timeout: Duration,
}

impl StatusClient {
    /// Create a builder for the given status page URL.
    pub fn builder(url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(url)
    }

    /// Create a client for `url` with default settings.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::builder(url).build()
    }

    /// The status page URL this client queries.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch and decode one status snapshot.
    ///
    /// A response code other than 200 fails without the body being read.
    pub async fn fetch(&self) -> Result<CheckReport> {
        tracing::debug!(url = %self.url, "fetching upstream status");

        let response = self
            .http
            .get(self.url.clone())
            .timeout(self.timeout)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Error::Status(response.status().to_string()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Connectivity probe - true if the endpoint serves a decodable report.
    pub async fn is_healthy(&self) -> bool {
        self.fetch().await.is_ok()
    }
}

/// Builder for creating a [`StatusClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    url: String,
    timeout: Duration,
    user_agent: String,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client.
    ///
    /// Fails with [`Error::InvalidUrl`] when the URL does not parse.
    pub fn build(self) -> Result<StatusClient> {
        let url = Url::parse(&self.url)?;

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .build()?;

        Ok(StatusClient {
            http,
            url,
            timeout: self.timeout,
        })
    }
}
