//! Types for authenticated REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::{decimal, empty_string_as_none, optional_decimal};
use crate::types::{OrderType, Side};

/// Balances of one wallet.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    /// Coin symbol
    pub coin: String,
    /// Coin display name
    #[serde(default)]
    pub coin_name: String,
    /// Deposit address of the wallet, if any
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub address: Option<String>,
    /// Amounts by state
    pub balances: BalanceAmounts,
}

/// Wallet amounts by state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BalanceAmounts {
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub available: Decimal,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub pending: Decimal,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub frozen: Decimal,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub in_orders: Decimal,
}

impl BalanceAmounts {
    /// Sum of all states.
    pub fn total(&self) -> Decimal {
        self.available + self.pending + self.frozen + self.in_orders
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WalletsResponse {
    #[serde(default)]
    pub wallets: Vec<Balance>,
}

/// Query parameters for the deposit address.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DepositAddressRequest<'a> {
    pub coin: &'a str,
}

/// Deposit address of a coin.
#[derive(Debug, Clone, Deserialize)]
pub struct DepositAddress {
    /// Coin symbol
    #[serde(default)]
    pub coin: String,
    /// Address to deposit to
    pub address: String,
}

/// A new order to place.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    /// Market name, e.g. `BTC-MXN`
    pub market: String,
    /// Buy or sell
    pub side: Side,
    /// Amount in the left coin (or value in the right coin, see `is_amount_value`)
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Limit or market
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Limit price
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    /// Interpret `amount` as value in the right coin
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_amount_value: bool,
}

impl NewOrder {
    /// Create a limit order.
    pub fn limit(market: impl Into<String>, side: Side, amount: Decimal, price: Decimal) -> Self {
        Self {
            market: market.into(),
            side,
            amount,
            order_type: OrderType::Limit,
            price: Some(price),
            is_amount_value: false,
        }
    }

    /// Create a market order.
    pub fn market(market: impl Into<String>, side: Side, amount: Decimal) -> Self {
        Self {
            market: market.into(),
            side,
            amount,
            order_type: OrderType::Market,
            price: None,
            is_amount_value: false,
        }
    }

    /// Interpret the amount as value in the right coin.
    pub fn amount_is_value(mut self) -> Self {
        self.is_amount_value = true;
        self
    }
}

/// An order, as returned by placing, listing or the order book.
///
/// Placing an order reports its identifier as `id`; listing open orders
/// reports it as `order_id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: Option<i64>,
    pub order_id: Option<i64>,
    pub market: String,
    pub side: Option<Side>,
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
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub created_at: Option<String>,
}

impl Order {
    /// The order identifier, whichever field carried it.
    pub fn identifier(&self) -> Option<i64> {
        self.order_id.or(self.id).filter(|id| *id > 0)
    }
}

/// Body of the close order call.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CloseOrderRequest {
    pub id: i64,
}

/// Direct transfer of funds to another Tauros account.
#[derive(Debug, Clone, Serialize)]
pub struct Transfer {
    /// Transfer PIN
    pub nip: String,
    /// Coin symbol
    pub coin: String,
    /// Recipient account (email)
    pub recipient: String,
    /// Amount to send, sent as a JSON number
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl Transfer {
    /// Create a new transfer.
    pub fn new(
        nip: impl Into<String>,
        coin: impl Into<String>,
        recipient: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            nip: nip.into(),
            coin: coin.into(),
            recipient: recipient.into(),
            amount,
        }
    }
}
