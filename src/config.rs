//! File based client configuration.
//!
//! A configuration file is a JSON object holding the API key, the base64
//! encoded API secret and optionally the base URL and account email:
//!
//! ```json
//! {
//!     "api_key": "...",
//!     "api_secret": "...",
//!     "url": "https://api.tauros.io",
//!     "email": "trader@example.com"
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::auth::StaticCredentials;
use crate::error::TaurosError;
use crate::rest::{TaurosRestClient, TaurosRestClientBuilder};

/// Client configuration loaded from JSON.
#[derive(Debug, Deserialize)]
pub struct TaurosConfig {
    /// The API key
    pub api_key: String,
    /// The base64 encoded API secret
    pub api_secret: SecretString,
    /// Base URL override
    #[serde(default)]
    pub url: Option<String>,
    /// Account email, used for signing in
    #[serde(default)]
    pub email: Option<String>,
}

impl TaurosConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, TaurosError> {
        serde_json::from_str(json)
            .map_err(|e| TaurosError::Configuration(format!("Invalid configuration: {e}")))
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TaurosError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TaurosError::Configuration(format!("Unable to read {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }

    /// Decode the credentials held by this configuration.
    pub fn credentials(&self) -> Result<StaticCredentials, TaurosError> {
        StaticCredentials::new(self.api_key.clone(), self.api_secret.expose_secret())
    }

    /// A client builder with credentials and base URL already applied.
    pub fn client_builder(&self) -> Result<TaurosRestClientBuilder, TaurosError> {
        let mut builder = TaurosRestClient::builder().credentials(Arc::new(self.credentials()?));
        if let Some(url) = self.url.as_deref().filter(|url| !url.is_empty()) {
            builder = builder.base_url(url);
        }
        Ok(builder)
    }

    /// Build a client from this configuration.
    pub fn build_client(&self) -> Result<TaurosRestClient, TaurosError> {
        self.client_builder()?.build()
    }
}
