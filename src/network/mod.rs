// Re-export network modules
pub mod api_client;
pub mod config;

// Re-export commonly used items
pub use api_client::{FetchSessionApi, SessionApi};

use config::ApiConfig;
use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

use crate::debug_log;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

/// Initialise the API configuration from the build-time `API_BASE_URL`.
/// Leaves an existing runtime configuration untouched.
pub fn init_api_config() {
    let Ok(mut guard) = API_CONFIG.write() else { return };
    if guard.is_none() {
        *guard = Some(ApiConfig::new().unwrap_or_default());
    }
}

/// Initialise the API configuration from a JS-provided URL.
/// This allows runtime configuration of the API endpoints.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    debug_log!("Initializing API config from JS: {}", api_base_url);
    let mut guard = API_CONFIG
        .write()
        .map_err(|_| JsValue::from_str("API config lock poisoned"))?;
    *guard = Some(ApiConfig::from_url(api_base_url));
    Ok(())
}

/// Snapshot of the current API configuration (same-origin when unset).
pub(crate) fn api_config() -> ApiConfig {
    API_CONFIG
        .read()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_default()
}
