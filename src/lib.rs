//! # Tauros Client
//!
//! An async Rust client library for the Tauros exchange REST API.
//!
//! ## Features
//!
//! - Signed requests (HMAC-SHA512 over a SHA256 digest, millisecond nonces)
//! - Normalization of the v1, v2 and webhook response envelopes into one payload-or-error result
//! - Classified errors that tell transport failures apart from rejected credentials
//! - Typed wrappers for market data, orders, wallets, transfers and webhooks
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tauros_api_client::rest::TaurosRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TaurosRestClient::new()?;
//!     let book = client.get_market_orders("BTC-MXN").await?;
//!     println!("Best bid: {:?}", book.best_bid());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use config::TaurosConfig;
pub use error::{ApiError, ErrorKind, TaurosError};
pub use types::common::{OrderType, Side};

/// Result type alias using TaurosError
pub type Result<T> = std::result::Result<T, TaurosError>;
