//! Error types for the Tauros client library.

use thiserror::Error;

/// The main error type for all Tauros client operations.
#[derive(Error, Debug)]
pub enum TaurosError {
    /// Client or credential configuration is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for authenticated endpoints")]
    MissingCredentials,

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// The response envelope could not be parsed
    #[error("Invalid response (HTTP {status}): {reason}. Body: {body}")]
    InvalidResponse {
        /// HTTP status code of the response
        status: u16,
        /// What went wrong while parsing
        reason: String,
        /// The raw response body
        body: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tauros API returned `success: false`
    #[error("Tauros API error: {0}")]
    Api(ApiError),
}

/// Coarse classification of a [`TaurosError`].
///
/// Callers use this to decide whether a failed call may be repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad secret encoding, missing credentials or an invalid base URL.
    Configuration,
    /// Network failure, timeout or unreadable HTTP response.
    Transport,
    /// Malformed envelope or payload.
    Protocol,
    /// The exchange rejected the call (e.g. insufficient balance).
    Business,
    /// The exchange rejected the token or signature.
    Security,
}

impl TaurosError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaurosError::Configuration(_) | TaurosError::MissingCredentials | TaurosError::Url(_) => {
                ErrorKind::Configuration
            }
            TaurosError::Http(_) | TaurosError::HttpMiddleware(_) | TaurosError::Timeout => {
                ErrorKind::Transport
            }
            TaurosError::InvalidResponse { .. } | TaurosError::Json(_) => ErrorKind::Protocol,
            TaurosError::Api(api_error) if api_error.is_security_related() => ErrorKind::Security,
            TaurosError::Api(_) => ErrorKind::Business,
        }
    }

    /// Whether the same call may be issued again as-is.
    ///
    /// Only transport failures qualify. A retry always needs a fresh nonce and signature.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Whether the exchange rejected the credentials or the signature.
    pub fn is_security_related(&self) -> bool {
        self.kind() == ErrorKind::Security
    }

    /// The API error, if the exchange answered with `success: false`.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            TaurosError::Api(api_error) => Some(api_error),
            _ => None,
        }
    }
}

/// An error reported by the Tauros API itself in the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The server message (or the raw body when the message was empty)
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ApiError {
    /// Create a new API error from a server message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Check if the server rejected the bearer token.
    pub fn is_invalid_token(&self) -> bool {
        self.message.to_ascii_lowercase().contains("invalid token")
    }

    /// Check if the server rejected the request signature.
    pub fn is_invalid_signature(&self) -> bool {
        self.message.to_ascii_lowercase().contains("signature")
    }

    /// Check if this error concerns credentials rather than business rules.
    pub fn is_security_related(&self) -> bool {
        self.is_invalid_token() || self.is_invalid_signature()
    }

    /// Check if this is an insufficient balance error.
    pub fn is_insufficient_balance(&self) -> bool {
        self.message.to_ascii_lowercase().contains("insufficient")
    }
}

/// Known Tauros error messages for pattern matching.
pub mod error_messages {
    /// Bearer token not accepted.
    pub const INVALID_TOKEN: &str = "Invalid token.";
    /// Signature did not match.
    pub const INVALID_SIGNATURE: &str = "Invalid signature";
    /// Webhook registration limit reached.
    pub const LIMIT_REACHED: &str = "Limit reached";
}
