//! Tauros REST API client.
//!
//! Every call goes through the same three steps:
//! - [`request::assemble`] builds the versioned path and headers and signs authenticated calls
//! - the HTTP client sends the request once, with a per-call timeout
//! - [`response::normalize`] unwraps the version-specific (or missing) envelope
//!
//! The typed endpoint wrappers live in [`public`], [`private`] and [`webhooks`].

mod client;
mod endpoints;
pub mod private;
pub mod public;
pub mod request;
pub mod response;
mod traits;
pub mod webhooks;

pub use client::{DEFAULT_TIMEOUT, TaurosRestClient, TaurosRestClientBuilder};
pub use endpoints::*;
pub use request::{ApiVersion, PreparedRequest, RequestSpec};
pub use response::normalize;
pub use traits::TaurosClient;
