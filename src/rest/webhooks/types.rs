//! Types for the webhook endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, error_messages};

/// A webhook registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    /// Identifier assigned by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// URL the exchange posts notifications to
    pub endpoint: String,
    pub notify_deposit: bool,
    pub notify_withdrawal: bool,
    #[serde(rename = "notify_order_place")]
    pub notify_order_placed: bool,
    pub notify_order_filled: bool,
    pub notify_trade: bool,
    /// Header name the exchange sends with each notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_header: Option<String>,
    /// Header value the exchange sends with each notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_content: Option<String>,
    pub is_active: bool,
    #[serde(skip_serializing)]
    pub created_at: Option<String>,
    #[serde(skip_serializing)]
    pub updated_at: Option<String>,
}

impl Webhook {
    /// Create an active webhook that is notified of every event type.
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            notify_deposit: true,
            notify_withdrawal: true,
            notify_order_placed: true,
            notify_order_filled: true,
            notify_trade: true,
            is_active: true,
            ..Self::default()
        }
    }

    /// Have the exchange send `header: content` with each notification.
    pub fn with_authorization(mut self, header: impl Into<String>, content: impl Into<String>) -> Self {
        self.authorization_header = Some(header.into());
        self.authorization_content = Some(content.into());
        self
    }
}

/// Paginated webhook listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WebhookList {
    #[serde(default)]
    pub results: Vec<Webhook>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedWebhook {
    pub id: i64,
}

/// Error carried inside an unwrapped webhook payload.
///
/// Webhook endpoints report failures in the payload itself, either as
/// `{"detail": "..."}` or as a list of messages such as `["Limit reached"]`.
pub(crate) fn payload_error(payload: &Value) -> Option<ApiError> {
    if let Some(detail) = payload.get("detail").and_then(Value::as_str) {
        return Some(ApiError::new(detail));
    }

    let messages = payload.as_array()?;
    let texts: Vec<&str> = messages.iter().filter_map(Value::as_str).collect();
    if texts.is_empty() {
        return None;
    }
    if texts.contains(&error_messages::LIMIT_REACHED) {
        return Some(ApiError::new("Webhook limit reached"));
    }
    Some(ApiError::new(texts.join("; ")))
}
