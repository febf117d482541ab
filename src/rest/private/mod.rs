//! Authenticated REST API endpoints.
//!
//! These endpoints require API credentials to be configured on the client.

mod types;

pub use types::*;

use crate::error::TaurosError;
use crate::rest::TaurosRestClient;
use crate::rest::endpoints::{v1, v2};
use crate::rest::request::{ApiVersion, RequestSpec};

impl TaurosRestClient {
    /// Get the balances of all wallets of the user.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tauros_api_client::rest::TaurosRestClient;
    /// use tauros_api_client::auth::EnvCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(EnvCredentials::from_env()?);
    ///     let client = TaurosRestClient::builder().credentials(credentials).build()?;
    ///
    ///     for wallet in client.get_balances().await? {
    ///         println!("{}: {}", wallet.coin, wallet.balances.available);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balances(&self) -> Result<Vec<Balance>, TaurosError> {
        let response: WalletsResponse = self
            .request(&RequestSpec::get(ApiVersion::V1, v1::LIST_BALANCES).authenticated())
            .await?;
        Ok(response.wallets)
    }

    /// Get the deposit address of the user for a coin.
    pub async fn get_deposit_address(&self, coin: &str) -> Result<String, TaurosError> {
        let spec = RequestSpec::get(ApiVersion::V1, v1::DEPOSIT_ADDRESS)
            .authenticated()
            .with_query(&DepositAddressRequest { coin })?;
        let response: DepositAddress = self.request(&spec).await?;
        Ok(response.address)
    }

    /// Place a new order.
    pub async fn place_order(&self, order: &NewOrder) -> Result<Order, TaurosError> {
        let spec = RequestSpec::post(ApiVersion::V1, v1::PLACE_ORDER)
            .authenticated()
            .with_json(order)?;
        self.request(&spec).await
    }

    /// Get all open orders of the user.
    pub async fn get_open_orders(&self) -> Result<Vec<Order>, TaurosError> {
        self.request(&RequestSpec::get(ApiVersion::V1, v1::OPEN_ORDERS).authenticated())
            .await
    }

    /// Close the order with the given identifier.
    pub async fn close_order(&self, order_id: i64) -> Result<(), TaurosError> {
        let spec = RequestSpec::post(ApiVersion::V1, v1::CLOSE_ORDER)
            .authenticated()
            .with_json(&CloseOrderRequest { id: order_id })?;
        self.execute(&spec).await?;
        Ok(())
    }

    /// Close all open orders, one after the other.
    ///
    /// Stops at the first failure. Returns the number of orders closed.
    pub async fn close_all_orders(&self) -> Result<usize, TaurosError> {
        let orders = self.get_open_orders().await?;
        let mut closed = 0;
        for order in &orders {
            let Some(order_id) = order.identifier() else {
                tracing::warn!(market = %order.market, "Open order without identifier, skipping");
                continue;
            };
            self.close_order(order_id).await?;
            closed += 1;
        }
        tracing::debug!(closed, "Closed open orders");
        Ok(closed)
    }

    /// Transfer funds directly to another Tauros account.
    pub async fn transfer(&self, transfer: &Transfer) -> Result<(), TaurosError> {
        let spec = RequestSpec::post(ApiVersion::V2, v2::INNER_TRANSFER)
            .authenticated()
            .with_json(transfer)?;
        self.execute(&spec).await?;
        Ok(())
    }
}
