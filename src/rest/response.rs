//! Response envelope normalization.
//!
//! Tauros wraps most responses in an envelope whose payload field depends on
//! the API version:
//!
//! ```text
//! v1: { "success": bool, "msg": any, "data": any }
//! v2: { "success": bool, "msg": any, "payload": any }
//! ```
//!
//! Webhook endpoints return the bare payload (and an empty body on some
//! deletes), which is taken as the payload of an implicit successful envelope.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::auth::EMPTY_BODY;
use crate::error::{ApiError, TaurosError};
use crate::rest::request::{ApiVersion, is_webhook_path};

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    msg: Option<Box<RawValue>>,
    #[serde(default)]
    data: Option<Box<RawValue>>,
    #[serde(default)]
    payload: Option<Box<RawValue>>,
}

/// Normalize a raw response body into its payload or a classified error.
///
/// * Webhook family: unless the body already carries a boolean `success`, it is
///   treated as `{"success":true,"payload":<body>}`, with an empty body standing in as `{}`.
///   The body must be a single well-formed JSON value.
/// * Unparseable JSON yields [`TaurosError::InvalidResponse`] with status and body.
/// * `success: false` yields [`TaurosError::Api`] with `msg`, or the whole body
///   when `msg` is empty.
/// * `success: true` yields the raw `data` (v1) or `payload` (v2 and webhooks)
///   sub-document, or `null` when the field is absent.
pub fn normalize(
    version: ApiVersion,
    path: &str,
    raw_body: &str,
    status: StatusCode,
) -> Result<Box<RawValue>, TaurosError> {
    let webhook = is_webhook_path(path);

    if webhook && !has_envelope(raw_body) {
        let body = if raw_body.trim().is_empty() {
            EMPTY_BODY
        } else {
            raw_body
        };
        // A synthesized envelope is always successful and carries the body as payload.
        return serde_json::from_str::<Box<RawValue>>(body)
            .map_err(|e| invalid_response(status, raw_body, "webhook payload", e));
    }

    let envelope: Envelope = serde_json::from_str(raw_body)
        .map_err(|e| invalid_response(status, raw_body, "response envelope", e))?;

    if !envelope.success {
        let message = envelope
            .msg
            .as_deref()
            .and_then(message_text)
            .unwrap_or_else(|| raw_body.to_string());
        let api_error = ApiError::new(message);
        if api_error.is_security_related() {
            tracing::warn!(
                path,
                status = status.as_u16(),
                error = %api_error,
                "Tauros rejected request credentials"
            );
        } else {
            tracing::debug!(path, status = status.as_u16(), error = %api_error, "Tauros API error");
        }
        return Err(TaurosError::Api(api_error));
    }

    let payload = match (webhook, version) {
        (false, ApiVersion::V1) => envelope.data,
        _ => envelope.payload,
    };

    match payload {
        Some(payload) => Ok(payload),
        None => Ok(RawValue::from_string("null".to_string())?),
    }
}

fn invalid_response(
    status: StatusCode,
    raw_body: &str,
    what: &str,
    error: serde_json::Error,
) -> TaurosError {
    TaurosError::InvalidResponse {
        status: status.as_u16(),
        reason: format!("Failed to parse {what}: {error}"),
        body: raw_body.to_string(),
    }
}

/// Whether a body already is an object with a boolean `success` field.
fn has_envelope(body: &str) -> bool {
    #[derive(Deserialize)]
    struct Probe {
        success: Option<bool>,
    }

    body.trim_start().starts_with('{')
        && matches!(
            serde_json::from_str::<Probe>(body),
            Ok(Probe { success: Some(_) })
        )
}

/// Text of the `msg` field, or `None` when it is empty.
fn message_text(msg: &RawValue) -> Option<String> {
    match serde_json::from_str::<String>(msg.get()) {
        Ok(text) if text.trim().is_empty() => None,
        Ok(text) => Some(text),
        Err(_) => Some(msg.get().to_string()),
    }
}
