//! Error taxonomy for the session panel.
//!
//! Validation errors stop a call before any network I/O.  Transport, HTTP
//! and decode errors are terminal for the single call that produced them and
//! never affect later calls or the poll timer.

use std::fmt;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// The session key input was empty or whitespace only.
    EmptySessionKey,
    /// The requested action is not one of pause / resume / stop.
    UnknownAction(String),
    /// `fetch` rejected or a JS call threw.
    Transport(String),
    /// Non-2xx response whose body was not a JSON payload.
    Http { status: u16, status_text: String },
    /// Response body could not be decoded.
    Decode(String),
    /// A required element is missing or has the wrong type.
    Dom(String),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::EmptySessionKey => write!(f, "session key is empty"),
            PanelError::UnknownAction(action) => write!(f, "Unknown session action: {}", action),
            PanelError::Transport(msg) => write!(f, "{}", msg),
            PanelError::Http { status, status_text } => {
                write!(f, "API request failed: {} {}", status, status_text)
            }
            PanelError::Decode(msg) => write!(f, "invalid response: {}", msg),
            PanelError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for PanelError {}

impl From<JsValue> for PanelError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.to_string()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        PanelError::Transport(msg)
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::Decode(err.to_string())
    }
}

impl From<PanelError> for JsValue {
    fn from(err: PanelError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
