//! Authentication module for Tauros API.
//!
//! This module provides:
//! - Credential management with eager secret decoding and secure storage
//! - Millisecond nonce generation for replay attack prevention
//! - Canonical message building and HMAC-SHA512 signatures for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    API_KEY_ENV, API_SECRET_ENV, Credentials, CredentialsProvider, EnvCredentials, StaticCredentials,
};
pub use nonce::{MillisecondNonce, NonceProvider};
pub use signature::{EMPTY_BODY, canonical_message, sign, sign_request};
