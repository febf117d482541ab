//! Tauros REST API endpoint paths.
//!
//! Paths are unversioned and carry no slashes at either end; the request
//! assembler adds the `/api/v{n}/` prefix and the trailing slash.

/// Base URL for the Tauros REST API.
pub const TAUROS_BASE_URL: &str = "https://api.tauros.io";

/// Version 1 endpoints (payload under `data`).
pub mod v1 {
    /// Order book of one market (public).
    pub const MARKET_ORDERS: &str = "trading/orders";
    /// Wallet balances.
    pub const LIST_BALANCES: &str = "data/listbalances";
    /// Deposit address for a coin.
    pub const DEPOSIT_ADDRESS: &str = "data/getdepositaddress";
    /// Place a new order.
    pub const PLACE_ORDER: &str = "trading/placeorder";
    /// Open orders of the user.
    pub const OPEN_ORDERS: &str = "trading/myopenorders";
    /// Close an open order.
    pub const CLOSE_ORDER: &str = "trading/closeorder";
}

/// Version 2 endpoints (payload under `payload`).
pub mod v2 {
    /// Available coins (public).
    pub const COINS: &str = "coins";
    /// Available markets (public).
    pub const MARKETS: &str = "trading/markets";
    /// Sign in with email and password (public).
    pub const SIGN_IN: &str = "auth/signin";
    /// Direct transfer to another Tauros account.
    pub const INNER_TRANSFER: &str = "wallets/inner-transfer";
    /// Webhook collection; single webhooks live under `webhooks/webhooks/{id}`.
    pub const WEBHOOKS: &str = "webhooks/webhooks";
}
