//! Common types used across the Tauros client library.

pub mod common;
pub mod notification;
pub mod serde_helpers;

pub use common::*;
pub use notification::{Notification, NotificationObject};
