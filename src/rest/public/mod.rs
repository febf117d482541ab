//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::TaurosError;
use crate::rest::TaurosRestClient;
use crate::rest::endpoints::{v1, v2};
use crate::rest::request::{ApiVersion, RequestSpec};

impl TaurosRestClient {
    /// Get all coins handled by the exchange, crypto first, then fiat.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tauros_api_client::rest::TaurosRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = TaurosRestClient::new()?;
    ///     for coin in client.get_coins().await? {
    ///         println!("{}: min withdrawal {:?}", coin.coin, coin.min_withdrawal);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_coins(&self) -> Result<Vec<Coin>, TaurosError> {
        let response: CoinsResponse = self
            .request(&RequestSpec::get(ApiVersion::V2, v2::COINS))
            .await?;
        Ok(response.into_coins())
    }

    /// Get the currently available markets.
    pub async fn get_markets(&self) -> Result<Vec<Market>, TaurosError> {
        self.request(&RequestSpec::get(ApiVersion::V2, v2::MARKETS))
            .await
    }

    /// Get the order book of one market.
    ///
    /// # Arguments
    ///
    /// * `market` - Market name, e.g. `BTC-MXN` (case-insensitive).
    pub async fn get_market_orders(&self, market: &str) -> Result<MarketOrders, TaurosError> {
        let spec = RequestSpec::get(ApiVersion::V1, v1::MARKET_ORDERS).with_query(
            &MarketOrdersRequest {
                market: market.to_lowercase(),
            },
        )?;
        self.request(&spec).await
    }

    /// Sign in with email and password to obtain a JWT token.
    pub async fn login(&self, email: &str, password: &str) -> Result<SignIn, TaurosError> {
        let spec = RequestSpec::post(ApiVersion::V2, v2::SIGN_IN)
            .with_json(&SignInRequest { email, password })?;
        self.request(&spec).await
    }
}
