//! Leptos frontend (browser build).

pub mod app;

use wasm_bindgen::prelude::*;

use crate::api::ApiClient;
use crate::config::ClientConfig;

/// Build the API client from values baked in at compile time.
pub(crate) fn client() -> Result<ApiClient, String> {
    let mut config = ClientConfig::default();
    if let Some(url) = option_env!("STOCKROOM_API_URL") {
        config = config.with_api_url(url).map_err(|e| e.to_string())?;
    }
    if let Some(store_id) = option_env!("STOCKROOM_STORE_ID") {
        config.store_id = store_id.parse().map_err(|e| format!("{e}"))?;
    }
    ApiClient::new(&config).map_err(|e| e.to_string())
}

/// WASM entry point for the frontend.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
