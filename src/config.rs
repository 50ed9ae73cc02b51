//! Panel behaviour settings.
//!
//! Defaults come from `constants.rs`, may be overridden at build time
//! (`PANEL_POLL_INTERVAL_MS`) and at runtime via `configurePanel({...})`
//! from the page's bootstrap script.  Missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LIMIT, DEFAULT_POLL_INTERVAL_MS};
use crate::notifier::NotificationStyle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    /// Auto-refresh period; `0` disables the timer.
    pub poll_interval_ms: u32,
    /// How many of the newest log entries the status box shows.
    pub log_limit: usize,
    pub notifications: NotificationStyle,
    /// Optional override for the API base URL (same as `init_api_config_js`).
    pub api_base_url: Option<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: build_time_poll_interval().unwrap_or(DEFAULT_POLL_INTERVAL_MS),
            log_limit: DEFAULT_LOG_LIMIT,
            notifications: NotificationStyle::default(),
            api_base_url: None,
        }
    }
}

impl PanelConfig {
    pub fn polling_enabled(&self) -> bool {
        self.poll_interval_ms > 0
    }
}

fn build_time_poll_interval() -> Option<u32> {
    option_env!("PANEL_POLL_INTERVAL_MS").and_then(|raw| raw.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_the_classic_panel() {
        let cfg = PanelConfig::default();
        assert_eq!(cfg.log_limit, 20);
        assert_eq!(cfg.notifications, NotificationStyle::Alert);
        assert!(cfg.api_base_url.is_none());
        assert!(cfg.polling_enabled());
    }

    #[test]
    fn partial_object_keeps_remaining_defaults() {
        let cfg: PanelConfig =
            serde_json::from_value(json!({ "pollIntervalMs": 0, "notifications": "toast" })).unwrap();
        assert_eq!(cfg.poll_interval_ms, 0);
        assert!(!cfg.polling_enabled());
        assert_eq!(cfg.notifications, NotificationStyle::Toast);
        assert_eq!(cfg.log_limit, 20);
    }

    #[test]
    fn api_base_url_is_read() {
        let cfg: PanelConfig =
            serde_json::from_value(json!({ "apiBaseUrl": "https://panel.example.com" })).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://panel.example.com"));
    }
}
