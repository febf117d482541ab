//! Tauros REST API client implementation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::value::RawValue;
use url::Url;

use crate::auth::{CredentialsProvider, MillisecondNonce, NonceProvider};
use crate::error::TaurosError;
use crate::rest::endpoints::TAUROS_BASE_URL;
use crate::rest::request::{PreparedRequest, RequestSpec, assemble};
use crate::rest::response::normalize;

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// The Tauros REST API client.
///
/// Each client owns its credentials and nonce provider, so several clients
/// with different accounts can live in one process. Requests are never
/// retried; a failed call surfaces as a classified [`TaurosError`].
///
/// # Example
///
/// ```rust,no_run
/// use tauros_api_client::rest::TaurosRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = TaurosRestClient::new()?;
///
///     let markets = client.get_markets().await?;
///     println!("Markets: {:?}", markets);
///
///     Ok(())
/// }
/// ```
///
/// For authenticated endpoints, provide credentials:
///
/// ```rust,no_run
/// use tauros_api_client::rest::TaurosRestClient;
/// use tauros_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "YXBpX3NlY3JldA==")?);
///     let client = TaurosRestClient::builder()
///         .credentials(credentials)
///         .build()?;
///
///     let balances = client.get_balances().await?;
///     println!("Balances: {:?}", balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct TaurosRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl TaurosRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`TaurosRestClient::builder()`] to configure credentials.
    pub fn new() -> Result<Self, TaurosError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> TaurosRestClientBuilder {
        TaurosRestClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Assemble (and sign, if required) a request without sending it.
    pub fn prepare(&self, spec: &RequestSpec) -> Result<PreparedRequest, TaurosError> {
        let credentials = self
            .credentials
            .as_deref()
            .map(|provider| provider.get_credentials());
        assemble(&self.base_url, spec, credentials, self.nonce_provider.as_ref())
    }

    /// Send a request and return the normalized, still undecoded payload.
    pub async fn execute(&self, spec: &RequestSpec) -> Result<Box<RawValue>, TaurosError> {
        let prepared = self.prepare(spec)?;

        tracing::debug!(
            method = %prepared.method,
            path = %prepared.absolute_path,
            nonce = ?prepared.nonce,
            "Sending Tauros request"
        );

        let mut request = self
            .http_client
            .request(prepared.method, &prepared.url)
            .headers(prepared.headers);
        if let Some(body) = prepared.body {
            request = request.body(body);
        }

        let start = Instant::now();
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(reqwest_error)?;

        tracing::debug!(
            path = %prepared.absolute_path,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Received Tauros response"
        );

        normalize(spec.version, &spec.path, &body, status)
    }

    /// Send a request and decode the normalized payload into `T`.
    pub async fn request<T>(&self, spec: &RequestSpec) -> Result<T, TaurosError>
    where
        T: serde::de::DeserializeOwned,
    {
        let payload = self.execute(spec).await?;
        Ok(serde_json::from_str(payload.get())?)
    }
}

fn reqwest_error(error: reqwest::Error) -> TaurosError {
    if error.is_timeout() {
        TaurosError::Timeout
    } else {
        TaurosError::Http(error)
    }
}

fn transport_error(error: reqwest_middleware::Error) -> TaurosError {
    match error {
        reqwest_middleware::Error::Reqwest(error) => reqwest_error(error),
        other => TaurosError::HttpMiddleware(other),
    }
}

impl std::fmt::Debug for TaurosRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaurosRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`TaurosRestClient`].
pub struct TaurosRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    timeout: Duration,
}

impl TaurosRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: TAUROS_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// Fails with a configuration error when the base URL is not an http(s) URL.
    pub fn build(self) -> Result<TaurosRestClient, TaurosError> {
        let base_url = Url::parse(&self.base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(TaurosError::Configuration(format!(
                "Unsupported base URL scheme: {}",
                base_url.scheme()
            )));
        }

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("tauros-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("tauros-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| TaurosError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        // Tracing only observes; no middleware may rewrite a signed request.
        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(MillisecondNonce::new()));

        Ok(TaurosRestClient {
            http_client: client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            credentials: self.credentials,
            nonce_provider,
        })
    }
}

impl Default for TaurosRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
