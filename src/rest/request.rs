//! Request description and assembly.
//!
//! A [`RequestSpec`] describes one logical API call. [`assemble`] turns it
//! into a [`PreparedRequest`]: the versioned path, the JSON headers and, for
//! authenticated calls, the bearer, nonce and signature headers.
//!
//! Signing is the last step of assembly. Nothing touches the request between
//! [`assemble`] and dispatch.

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::auth::{Credentials, NonceProvider, sign_request};
use crate::error::TaurosError;

/// Header carrying the request nonce.
pub const NONCE_HEADER: HeaderName = HeaderName::from_static("taur-nonce");
/// Header carrying the base64 request signature.
pub const SIGNATURE_HEADER: HeaderName = HeaderName::from_static("taur-signature");

const APPLICATION_JSON: &str = "application/json";

/// Tauros API version.
///
/// The version decides both the path prefix and where the payload lives in
/// the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// `/api/v1`, payload under `data`.
    V1,
    /// `/api/v2`, payload under `payload`.
    V2,
}

impl ApiVersion {
    /// The numeric version.
    pub fn number(self) -> u8 {
        match self {
            ApiVersion::V1 => 1,
            ApiVersion::V2 => 2,
        }
    }

    /// Name of the envelope field holding the payload of a successful response.
    pub fn payload_field(self) -> &'static str {
        match self {
            ApiVersion::V1 => "data",
            ApiVersion::V2 => "payload",
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.number())
    }
}

/// Description of a single API call.
///
/// `path` is the endpoint path without version prefix and without leading or
/// trailing slashes, e.g. `trading/placeorder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// API version
    pub version: ApiVersion,
    /// HTTP method
    pub method: Method,
    /// Unversioned endpoint path
    pub path: String,
    /// URL-encoded query string, appended after path construction
    pub query: Option<String>,
    /// Whether the call must be signed
    pub requires_auth: bool,
    /// JSON request body, empty when there is none
    pub body: String,
}

impl RequestSpec {
    /// Create an unauthenticated request without body.
    pub fn new(version: ApiVersion, method: Method, path: impl AsRef<str>) -> Self {
        Self {
            version,
            method,
            path: path.as_ref().trim_matches('/').to_string(),
            query: None,
            requires_auth: false,
            body: String::new(),
        }
    }

    /// Shorthand for a GET request.
    pub fn get(version: ApiVersion, path: impl AsRef<str>) -> Self {
        Self::new(version, Method::GET, path)
    }

    /// Shorthand for a POST request.
    pub fn post(version: ApiVersion, path: impl AsRef<str>) -> Self {
        Self::new(version, Method::POST, path)
    }

    /// Shorthand for a DELETE request.
    pub fn delete(version: ApiVersion, path: impl AsRef<str>) -> Self {
        Self::new(version, Method::DELETE, path)
    }

    /// Mark the request as requiring a signature.
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Attach query parameters.
    pub fn with_query<Q>(mut self, params: &Q) -> Result<Self, TaurosError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| TaurosError::Configuration(format!("Invalid query parameters: {e}")))?;
        self.query = (!query.is_empty()).then_some(query);
        Ok(self)
    }

    /// Attach a JSON body.
    pub fn with_json<B>(mut self, body: &B) -> Result<Self, TaurosError>
    where
        B: serde::Serialize + ?Sized,
    {
        self.body = serde_json::to_string(body)?;
        Ok(self)
    }

    /// The absolute, versioned path of this request.
    pub fn absolute_path(&self) -> String {
        absolute_path(self.version, &self.path, self.requires_auth)
    }

    /// Whether this request targets the webhook endpoint family.
    pub fn is_webhook(&self) -> bool {
        is_webhook_path(&self.path)
    }
}

/// Resolve `/api/v{version}/{path}`.
///
/// Authenticated paths always end with `/`; unauthenticated paths never do.
/// The server rejects either form on the wrong kind of call.
pub fn absolute_path(version: ApiVersion, path: &str, requires_auth: bool) -> String {
    let path = path.trim_matches('/');
    let mut absolute = format!("/api/{version}/{path}");
    if requires_auth {
        absolute.push('/');
    }
    absolute
}

/// Whether an unversioned path belongs to the webhook endpoint family.
pub fn is_webhook_path(path: &str) -> bool {
    path.trim_start_matches('/').split('/').next() == Some("webhooks")
}

/// A fully assembled request, ready for dispatch.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Full URL including base URL and query string
    pub url: String,
    /// Versioned path that was signed
    pub absolute_path: String,
    /// All request headers
    pub headers: HeaderMap,
    /// Body as sent on the wire
    pub body: Option<String>,
    /// Nonce consumed by this request, if it was signed
    pub nonce: Option<u64>,
}

/// Assemble a request.
///
/// Exactly one nonce is consumed for an authenticated request and none for
/// a public one. Fails with [`TaurosError::MissingCredentials`] when the
/// request must be signed and no credentials are available.
pub fn assemble(
    base_url: &str,
    spec: &RequestSpec,
    credentials: Option<&Credentials>,
    nonce_provider: &dyn NonceProvider,
) -> Result<PreparedRequest, TaurosError> {
    let absolute_path = spec.absolute_path();
    let url = match &spec.query {
        Some(query) => format!("{}{}?{}", base_url.trim_end_matches('/'), absolute_path, query),
        None => format!("{}{}", base_url.trim_end_matches('/'), absolute_path),
    };

    // GET carries no body; other methods send "{}" for an empty body, which is also what gets signed.
    let body = if !spec.body.is_empty() {
        Some(spec.body.clone())
    } else if spec.method == Method::GET {
        None
    } else {
        Some(crate::auth::EMPTY_BODY.to_string())
    };

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

    let mut nonce = None;
    if spec.requires_auth {
        let credentials = credentials.ok_or(TaurosError::MissingCredentials)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", credentials.api_key))
            .map_err(|e| TaurosError::Configuration(format!("API key is not a valid header value: {e}")))?;

        let value = nonce_provider.next_nonce();
        let signature = sign_request(
            credentials,
            value,
            spec.method.as_str(),
            &absolute_path,
            body.as_deref().unwrap_or_default(),
        );
        let signature = HeaderValue::from_str(&signature)
            .map_err(|e| TaurosError::Configuration(format!("Signature is not a valid header value: {e}")))?;

        headers.insert(AUTHORIZATION, bearer);
        headers.insert(NONCE_HEADER, HeaderValue::from(value));
        headers.insert(SIGNATURE_HEADER, signature);
        nonce = Some(value);
    }

    Ok(PreparedRequest {
        method: spec.method.clone(),
        url,
        absolute_path,
        headers,
        body,
        nonce,
    })
}
