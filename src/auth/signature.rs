//! HMAC-SHA512 signature generation for Tauros API authentication.
//!
//! Authenticated endpoints require a signature computed as:
//! ```text
//! message   = nonce + METHOD + absolute_path + body   (empty body -> "{}")
//! signature = base64(HMAC-SHA512(SHA256(message), base64_decode(api_secret)))
//! ```
//!
//! The signature is sent in the `Taur-Signature` header, the nonce in `Taur-Nonce`.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

use crate::auth::Credentials;

type HmacSha512 = Hmac<Sha512>;

/// Body text signed in place of an empty request body.
pub const EMPTY_BODY: &str = "{}";

/// Build the canonical message that gets hashed and signed.
///
/// `absolute_path` is used verbatim; callers signing an authenticated request
/// must already have appended the trailing slash.
///
/// # Example
///
/// ```rust
/// use tauros_api_client::auth::canonical_message;
///
/// let message = canonical_message(1577836800000, "GET", "/api/v1/trading/myopenorders/", "");
/// assert_eq!(message, "1577836800000GET/api/v1/trading/myopenorders/{}");
/// ```
pub fn canonical_message(nonce: u64, method: &str, absolute_path: &str, body: &str) -> String {
    let body = if body.is_empty() { EMPTY_BODY } else { body };
    let method = method.to_ascii_uppercase();
    let nonce = nonce.to_string();

    let mut message = String::with_capacity(nonce.len() + method.len() + absolute_path.len() + body.len());
    message.push_str(&nonce);
    message.push_str(&method);
    message.push_str(absolute_path);
    message.push_str(body);
    message
}

/// Sign a canonical message with the decoded API secret.
///
/// Returns the base64 encoded HMAC-SHA512 of the SHA256 digest of `message`.
/// Signing cannot fail: HMAC accepts keys of any length.
pub fn sign(secret: &[u8], message: &[u8]) -> String {
    let digest = Sha256::digest(message);

    let mut hmac = HmacSha512::new_from_slice(secret)
        .unwrap_or_else(|_| unreachable!("HMAC can take key of any size"));
    hmac.update(&digest);
    let hmac_result = hmac.finalize().into_bytes();

    BASE64.encode(hmac_result)
}

/// Sign a request for the Tauros API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the decoded secret
/// * `nonce` - The nonce value for this request
/// * `method` - The HTTP method
/// * `absolute_path` - The versioned path, e.g. `/api/v1/data/listbalances/`
/// * `body` - The JSON body as sent on the wire
///
/// # Example
///
/// ```rust
/// use tauros_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "YXBpX3NlY3JldA==")?; // base64 of "api_secret"
/// let signature = sign_request(&credentials, 1577836800000, "GET", "/api/v1/data/listbalances/", "");
/// assert_eq!(signature.len(), 88);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    nonce: u64,
    method: &str,
    absolute_path: &str,
    body: &str,
) -> String {
    let message = canonical_message(nonce, method, absolute_path, body);
    sign(credentials.expose_secret(), message.as_bytes())
}
