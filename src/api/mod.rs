//! HTTP layer: typed requests against the Event Hive API and the error
//! contract for failed responses.

pub mod client;
pub mod error;
pub mod manager;
pub mod models;

pub use client::ApiClient;
pub use error::{fallback, ApiError};
pub use manager::ApiManager;
