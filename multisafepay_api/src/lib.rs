//! Client runtime for the MultiSafepay JSON API.
//!
//! [`Client`] sends JSON requests, unwraps the `{"success", "data"}` envelope
//! and reports every failure as one [`Error`] shape. Identifier and amount
//! fields, which the API emits as numbers or as strings, are normalized by
//! [`coerce`].

mod client;
pub mod coerce;
pub mod debug_log;
mod errors;
mod query;
mod transport;
pub mod types;
pub use self::client::{api_path, Client, ClientBuilder, Environment};
pub use self::debug_log::{DebugLog, LogEntry};
pub use self::errors::{Error, LOCAL_ERROR_CODE};
pub use self::query::{GatewayQuery, Query};
pub use reqwest::Method;
