//! Credential management for Tauros API authentication.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use secrecy::{ExposeSecret, SecretSlice};

use crate::error::TaurosError;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "TAUROS_API_KEY";
/// Environment variable holding the base64 encoded API secret.
pub const API_SECRET_ENV: &str = "TAUROS_API_SECRET";

/// API credentials containing the key and the decoded secret.
///
/// The secret is base64 decoded once, at construction, so signing a request
/// can never fail because of a badly encoded secret.
pub struct Credentials {
    /// The API key (sent as the bearer token)
    pub api_key: String,
    /// The decoded API secret (private, used as the HMAC key)
    secret: SecretSlice<u8>,
}

impl Credentials {
    /// Create credentials from an API key and a base64 encoded secret.
    ///
    /// Returns [`TaurosError::Configuration`] when the secret is not valid base64.
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<str>) -> Result<Self, TaurosError> {
        let decoded = BASE64
            .decode(api_secret.as_ref().trim())
            .map_err(|e| TaurosError::Configuration(format!("API secret must be valid base64: {e}")))?;

        Ok(Self {
            api_key: api_key.into(),
            secret: SecretSlice::from(decoded),
        })
    }

    /// Get the decoded secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &[u8] {
        self.secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

/// Static credentials provider that holds credentials directly.
#[derive(Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<str>) -> Result<Self, TaurosError> {
        Ok(Self {
            credentials: Credentials::new(api_key, api_secret)?,
        })
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `TAUROS_API_KEY` and `TAUROS_API_SECRET`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, TaurosError> {
        Self::from_env_vars(API_KEY_ENV, API_SECRET_ENV)
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, TaurosError> {
        let api_key = std::env::var(key_var)
            .map_err(|_| TaurosError::Configuration(format!("Environment variable {key_var} not set")))?;
        let api_secret = std::env::var(secret_var).map_err(|_| {
            TaurosError::Configuration(format!("Environment variable {secret_var} not set"))
        })?;

        Ok(Self {
            credentials: Credentials::new(api_key, api_secret)?,
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_credentials_debug_redacted() {
        let secret = BASE64.encode("super_secret");
        let creds = Credentials::new("my_key", &secret).unwrap();
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(!debug_str.contains(&secret));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_secret_decoded_eagerly() {
        let creds = Credentials::new("key", BASE64.encode("raw secret bytes")).unwrap();
        assert_eq!(creds.expose_secret(), b"raw secret bytes");
    }

    #[test]
    fn test_invalid_secret_is_configuration_error() {
        let err = Credentials::new("key", "not base64 at all!").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", BASE64.encode("secret")).unwrap();
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), b"secret");
    }

    #[test]
    fn test_env_credentials_missing_var() {
        let err = EnvCredentials::from_env_vars(
            "TAUROS_TEST_UNSET_KEY_VAR",
            "TAUROS_TEST_UNSET_SECRET_VAR",
        )
        .unwrap_err();
        assert!(matches!(err, TaurosError::Configuration(_)));
    }
}
