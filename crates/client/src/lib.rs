//! `stockroom-client`
//!
//! **Responsibility:** thin client over the inventory API.
//!
//! This crate provides:
//! - Connection configuration (`STOCKROOM_*` environment variables)
//! - A typed HTTP client for products and stock movements
//! - Page routes and the Leptos UI (browser builds only)
//!
//! The API remains the authority; stock status and dashboard counts are
//! derived locally from whatever snapshot it returns.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use api::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use routes::Route;
