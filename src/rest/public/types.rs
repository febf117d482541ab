//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::private::Order;
use crate::types::serde_helpers::optional_decimal;

/// A coin handled by the exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct Coin {
    /// Coin symbol
    pub coin: String,
    /// Minimum withdrawal amount
    #[serde(rename = "min_withdraw", default, deserialize_with = "optional_decimal::deserialize")]
    pub min_withdrawal: Option<Decimal>,
    /// Withdrawal fee
    #[serde(rename = "fee_withdraw", default, deserialize_with = "optional_decimal::deserialize")]
    pub fee_withdrawal: Option<Decimal>,
    /// Country, for fiat currencies
    #[serde(default)]
    pub country: Option<String>,
    /// Confirmations required for deposits
    #[serde(default)]
    pub confirmations_required: Option<u32>,
}

/// Coins payload, split into crypto and fiat.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CoinsResponse {
    // The server spells this field "cryto".
    #[serde(rename = "cryto", alias = "crypto", default)]
    pub crypto: Vec<Coin>,
    #[serde(default)]
    pub fiat: Vec<Coin>,
}

impl CoinsResponse {
    pub(crate) fn into_coins(self) -> Vec<Coin> {
        let mut coins = self.crypto;
        coins.extend(self.fiat);
        coins
    }
}

/// A trading market and its limits.
#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    /// Market name, e.g. `BTC-MXN`
    pub name: String,
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub min_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub max_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub min_value: Option<Decimal>,
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub max_value: Option<Decimal>,
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub min_price: Option<Decimal>,
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub max_price: Option<Decimal>,
    /// Whether the market accepts orders
    #[serde(default)]
    pub is_open: bool,
}

/// Order book of one market.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketOrders {
    /// Market name
    #[serde(default)]
    pub market: String,
    /// Sell side
    #[serde(default, alias = "Asks")]
    pub asks: Vec<Order>,
    /// Buy side
    #[serde(default, alias = "Bids")]
    pub bids: Vec<Order>,
}

impl MarketOrders {
    /// Lowest ask price.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.iter().filter_map(|o| o.price).min()
    }

    /// Highest bid price.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.iter().filter_map(|o| o.price).max()
    }
}

/// Query parameters for the order book.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MarketOrdersRequest {
    pub market: String,
}

/// Sign-in request body.
#[derive(Serialize)]
pub(crate) struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Result of a sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct SignIn {
    /// JWT token
    pub token: String,
    /// Whether a second factor is still required
    #[serde(default)]
    pub two_factor: bool,
}
