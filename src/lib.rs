use wasm_bindgen::prelude::*;

mod macros;

mod command_executors;
pub mod config;
mod constants;
mod dom_utils;
pub mod error;
pub mod form_validation;
pub mod messages; // Message / Command enums
pub mod models;
pub mod network;
pub mod notifier;
pub mod panel;
mod scheduling;
pub mod state;
mod toast;
pub mod token_fields;
pub mod ui;
pub mod update; // Pure reducer
pub mod views; // Status box HTML

use config::PanelConfig;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    network::init_api_config();
    ui::mount(&document, PanelConfig::default())?;
    crate::debug_log!("session panel mounted");
    Ok(())
}

// ---------------------------------------------------------------------------
// Functions the page markup calls directly (onclick / onchange handlers)
// ---------------------------------------------------------------------------

/// Fetch and render the status of the session named in `sessionKeyInput`.
#[wasm_bindgen(js_name = checkStatus)]
pub fn check_status() {
    if panel::with_panel(|p| p.check_status()).is_none() {
        crate::warn_log!("checkStatus called before the panel was mounted");
    }
}

/// Send `pause`, `resume` or `stop` for the current session.
#[wasm_bindgen(js_name = sessionAction)]
pub fn session_action(action: &str) {
    if panel::with_panel(|p| p.session_action(action)).is_none() {
        crate::warn_log!("sessionAction({}) called before the panel was mounted", action);
    }
}

/// Re-evaluate which token field group is visible and required.
#[wasm_bindgen(js_name = updateTokenFields)]
pub fn update_token_fields() {
    if panel::with_panel(|p| p.update_token_fields()).is_none() {
        crate::warn_log!("updateTokenFields called before the panel was mounted");
    }
}

/// Apply a runtime configuration object, e.g.
/// `configurePanel({ pollIntervalMs: 10000, notifications: "toast" })`.
#[wasm_bindgen(js_name = configurePanel)]
pub fn configure_panel(config: JsValue) -> Result<(), JsValue> {
    let config: PanelConfig = if config.is_undefined() || config.is_null() {
        PanelConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    if let Some(url) = &config.api_base_url {
        network::init_api_config_js(url)?;
    }
    panel::with_panel(|p| p.reconfigure(&config))
        .ok_or_else(|| JsValue::from_str("session panel is not mounted"))
}
