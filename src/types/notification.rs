//! Notifications pushed by Tauros.
//!
//! The exchange POSTs these to registered webhook endpoints and sends the
//! same shape over its websocket feed. The `object` carries whichever fields
//! apply to the event type (order placed/filled, deposit, withdrawal, transfer).

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::serde_helpers::{empty_string_as_none, optional_decimal};

/// A notification message.
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    /// Short title
    #[serde(default)]
    pub title: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Event type
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Event date as sent by the server
    #[serde(default)]
    pub date: String,
    /// Event details
    #[serde(default)]
    pub object: NotificationObject,
}

impl Notification {
    /// Parse a notification from a webhook request body or websocket frame.
    pub fn from_json(body: &str) -> Result<Self, crate::error::TaurosError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Details of a notification.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationObject {
    pub id: Option<i64>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub market: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub side: Option<String>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub amount: Option<Decimal>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub initial_amount: Option<Decimal>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub filled: Option<Decimal>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub value: Option<Decimal>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub initial_value: Option<Decimal>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub price: Option<Decimal>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub fee_decimal: Option<Decimal>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub fee_percent: Option<Decimal>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub fee_amount_paid: Option<Decimal>,
    pub is_open: Option<bool>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub amount_paid: Option<Decimal>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub amount_received: Option<Decimal>,
    /// Amounts actually traded, present on order-filled events.
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub trade_amount_paid: Option<Decimal>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub trade_amount_received: Option<Decimal>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub closed_at: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub left_coin: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub right_coin: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub sender: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub receiver: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub coin: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub coin_name: Option<String>,
    /// Transaction hash; the server spells it `txId`.
    #[serde(rename = "txId", alias = "tx_id", deserialize_with = "empty_string_as_none::deserialize")]
    pub tx_id: Option<String>,
    pub confirmed: Option<bool>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub confirmed_at: Option<String>,
    #[serde(rename = "is_innerTransfer", alias = "is_inner_transfer")]
    pub is_inner_transfer: Option<bool>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub address: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub explorer_link: Option<String>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub fee_amount: Option<Decimal>,
    #[serde(deserialize_with = "optional_decimal::deserialize")]
    pub total_amount: Option<Decimal>,
    #[serde(rename = "type", deserialize_with = "empty_string_as_none::deserialize")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub description: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub transaction_type: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub datetime: Option<String>,
}
