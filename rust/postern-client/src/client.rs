use std::time::Duration;

use async_trait::async_trait;
use postern_cache::FetchBackend;
use reqwest::StatusCode;
use url::Url;

use crate::SecurityClientError;

/// Well-known request path for the full authorized path listing.
pub const AUTH_INFO_PATH: &str = "/api/security/getauthinfo";

/// Well-known request path for the single-URL authorization check.
pub const CHECK_URL_AUTH_PATH: &str = "/api/security/CheckUrlAuth";

/// Configuration for the security API client
#[derive(Clone, Debug)]
pub struct SecurityClientConfig {
    /// Base URL for the API (e.g., "https://api.example.com")
    pub endpoint: String,

    /// Optional bearer token for authentication
    pub bearer_token: Option<String>,

    /// Optional timeout for requests in seconds (default: 30)
    pub timeout_seconds: Option<u64>,

    /// Optional custom headers to send with each request
    pub headers: Vec<(String, String)>,
}

impl Default for SecurityClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            bearer_token: None,
            timeout_seconds: Some(30),
            headers: Vec::new(),
        }
    }
}

impl SecurityClientConfig {
    /// Create a new configuration pointing at the given base URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the bearer token sent with each request
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Add a custom header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }
}

/// A client for the remote security API.
///
/// Exposes the authorized path listing consumed by the permission cache and
/// the uncached single-URL authorization check.
#[derive(Clone)]
pub struct SecurityClient {
    config: SecurityClientConfig,
    client: reqwest::Client,
}

impl SecurityClient {
    /// Create a new client with the given configuration
    pub fn new(config: SecurityClientConfig) -> Result<Self, SecurityClientError> {
        let mut client_builder = reqwest::Client::builder();

        if let Some(timeout) = config.timeout_seconds {
            client_builder = client_builder.timeout(Duration::from_secs(timeout));
        }

        let client = client_builder
            .build()
            .map_err(|error| SecurityClientError::ConnectionFailed(error.to_string()))?;

        Ok(Self { config, client })
    }

    /// Build the full URL for a given request path
    fn build_url(&self, path: &str) -> String {
        let base_url = self.config.endpoint.trim_end_matches('/');
        format!("{base_url}{path}")
    }

    /// Add authentication and custom headers to a request
    fn prepare_request(&self, request_builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let mut builder = request_builder;

        if let Some(token) = &self.config.bearer_token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        for (name, value) in &self.config.headers {
            builder = builder.header(name, value);
        }

        builder
    }

    /// Retrieve the full set of hierarchy paths the current session is
    /// authorized to access, as reported by the server.
    pub async fn authorized_paths(&self) -> Result<Vec<String>, SecurityClientError> {
        let url = self.build_url(AUTH_INFO_PATH);
        let response = self.prepare_request(self.client.get(&url)).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            status => Err(unexpected_status(status)),
        }
    }

    /// Ask the server whether the current session may access the given URL.
    ///
    /// This is a pass-through check: the result is not cached. Bare paths
    /// (neither absolute `http(s)` URLs nor rooted at `/`) are normalized
    /// with a leading `/` before being encoded into the query string.
    pub async fn check_url_auth(&self, url: &str) -> Result<bool, SecurityClientError> {
        let target = if url.starts_with("http") || url.starts_with('/') {
            url.to_string()
        } else {
            format!("/{url}")
        };

        let mut request_url = Url::parse(&self.build_url(CHECK_URL_AUTH_PATH))
            .map_err(|error| SecurityClientError::RequestFailed(error.to_string()))?;
        request_url.query_pairs_mut().append_pair("url", &target);

        tracing::debug!("Checking URL authorization for '{target}'");

        let response = self
            .prepare_request(self.client.get(request_url))
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            status => Err(unexpected_status(status)),
        }
    }
}

/// The permission cache reads through the client by request path: the cache
/// key is the path of the GET endpoint whose JSON body is the cached value.
/// A 404 is reported as an absent value rather than an error, so that the
/// cache treats it as "no data" instead of a failure worth logging.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl FetchBackend for SecurityClient {
    type Key = String;
    type Value = Vec<String>;
    type Error = SecurityClientError;

    async fn fetch(&self, key: &Self::Key) -> Result<Option<Self::Value>, Self::Error> {
        let url = self.build_url(key);
        let response = self.prepare_request(self.client.get(&url)).send().await?;

        match response.status() {
            status if status.is_success() => Ok(Some(response.json().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(unexpected_status(status)),
        }
    }
}

fn unexpected_status(status: StatusCode) -> SecurityClientError {
    SecurityClientError::UnexpectedStatus {
        status: status.as_u16(),
        message: status.canonical_reason().unwrap_or_default().to_string(),
    }
}
