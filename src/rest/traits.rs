//! Trait definition for the Tauros REST API client.
//!
//! The `TaurosClient` trait abstracts all REST API operations, enabling mock
//! implementations in tests and wrappers around the real client (for example
//! an order-closing loop that only needs `get_open_orders` and `close_order`).
//!
//! # Example
//!
//! ```rust,ignore
//! use tauros_api_client::rest::{TaurosClient, TaurosRestClient};
//!
//! async fn print_markets<C: TaurosClient>(client: &C) -> Result<(), tauros_api_client::TaurosError> {
//!     for market in client.get_markets().await? {
//!         println!("{} open={}", market.name, market.is_open);
//!     }
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::TaurosError;
use crate::rest::TaurosRestClient;
use crate::rest::private::{Balance, NewOrder, Order, Transfer};
use crate::rest::public::{Coin, Market, MarketOrders, SignIn};
use crate::rest::webhooks::Webhook;

/// Trait defining all Tauros REST API operations.
///
/// All methods are async and return `Result<T, TaurosError>`.
pub trait TaurosClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get all coins handled by the exchange.
    fn get_coins(&self) -> impl Future<Output = Result<Vec<Coin>, TaurosError>> + Send;

    /// Get the available markets.
    fn get_markets(&self) -> impl Future<Output = Result<Vec<Market>, TaurosError>> + Send;

    /// Get the order book of one market.
    fn get_market_orders(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<MarketOrders, TaurosError>> + Send;

    /// Sign in with email and password.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<SignIn, TaurosError>> + Send;

    // ========== Authenticated Endpoints - Wallets ==========

    /// Get the balances of all wallets.
    fn get_balances(&self) -> impl Future<Output = Result<Vec<Balance>, TaurosError>> + Send;

    /// Get the deposit address for a coin.
    fn get_deposit_address(
        &self,
        coin: &str,
    ) -> impl Future<Output = Result<String, TaurosError>> + Send;

    /// Transfer funds to another Tauros account.
    fn transfer(&self, transfer: &Transfer) -> impl Future<Output = Result<(), TaurosError>> + Send;

    // ========== Authenticated Endpoints - Trading ==========

    /// Place a new order.
    fn place_order(&self, order: &NewOrder) -> impl Future<Output = Result<Order, TaurosError>> + Send;

    /// Get all open orders.
    fn get_open_orders(&self) -> impl Future<Output = Result<Vec<Order>, TaurosError>> + Send;

    /// Close one order.
    fn close_order(&self, order_id: i64) -> impl Future<Output = Result<(), TaurosError>> + Send;

    /// Close all open orders.
    fn close_all_orders(&self) -> impl Future<Output = Result<usize, TaurosError>> + Send;

    // ========== Authenticated Endpoints - Webhooks ==========

    /// Get all registered webhooks.
    fn get_webhooks(&self) -> impl Future<Output = Result<Vec<Webhook>, TaurosError>> + Send;

    /// Register a webhook.
    fn create_webhook(&self, webhook: &Webhook) -> impl Future<Output = Result<i64, TaurosError>> + Send;

    /// Delete one webhook.
    fn delete_webhook(&self, webhook_id: i64) -> impl Future<Output = Result<(), TaurosError>> + Send;

    /// Delete all registered webhooks.
    fn delete_webhooks(&self) -> impl Future<Output = Result<usize, TaurosError>> + Send;
}

impl TaurosClient for TaurosRestClient {
    async fn get_coins(&self) -> Result<Vec<Coin>, TaurosError> {
        TaurosRestClient::get_coins(self).await
    }

    async fn get_markets(&self) -> Result<Vec<Market>, TaurosError> {
        TaurosRestClient::get_markets(self).await
    }

    async fn get_market_orders(&self, market: &str) -> Result<MarketOrders, TaurosError> {
        TaurosRestClient::get_market_orders(self, market).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<SignIn, TaurosError> {
        TaurosRestClient::login(self, email, password).await
    }

    async fn get_balances(&self) -> Result<Vec<Balance>, TaurosError> {
        TaurosRestClient::get_balances(self).await
    }

    async fn get_deposit_address(&self, coin: &str) -> Result<String, TaurosError> {
        TaurosRestClient::get_deposit_address(self, coin).await
    }

    async fn transfer(&self, transfer: &Transfer) -> Result<(), TaurosError> {
        TaurosRestClient::transfer(self, transfer).await
    }

    async fn place_order(&self, order: &NewOrder) -> Result<Order, TaurosError> {
        TaurosRestClient::place_order(self, order).await
    }

    async fn get_open_orders(&self) -> Result<Vec<Order>, TaurosError> {
        TaurosRestClient::get_open_orders(self).await
    }

    async fn close_order(&self, order_id: i64) -> Result<(), TaurosError> {
        TaurosRestClient::close_order(self, order_id).await
    }

    async fn close_all_orders(&self) -> Result<usize, TaurosError> {
        TaurosRestClient::close_all_orders(self).await
    }

    async fn get_webhooks(&self) -> Result<Vec<Webhook>, TaurosError> {
        TaurosRestClient::get_webhooks(self).await
    }

    async fn create_webhook(&self, webhook: &Webhook) -> Result<i64, TaurosError> {
        TaurosRestClient::create_webhook(self, webhook).await
    }

    async fn delete_webhook(&self, webhook_id: i64) -> Result<(), TaurosError> {
        TaurosRestClient::delete_webhook(self, webhook_id).await
    }

    async fn delete_webhooks(&self) -> Result<usize, TaurosError> {
        TaurosRestClient::delete_webhooks(self).await
    }
}
