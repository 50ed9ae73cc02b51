use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PanelError;

/// A user-supplied session identifier.  Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    /// Trim `raw` and reject it when nothing is left.
    pub fn parse(raw: &str) -> Result<Self, PanelError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PanelError::EmptySessionKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `GET /session/{key}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logs: Vec<LogEntry>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SessionStatus {
    /// The newest `limit` log entries, oldest of the slice first.
    pub fn recent_logs(&self, limit: usize) -> &[LogEntry] {
        let start = self.logs.len().saturating_sub(limit);
        &self.logs[start..]
    }

    pub fn server_error(&self) -> Option<&str> {
        non_empty(&self.error)
    }
}

/// One message send attempt recorded by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LogEntry {
    /// The send failure, if any.  An empty `error` means the send went through.
    pub fn failure(&self) -> Option<&str> {
        non_empty(&self.error)
    }
}

/// Body of `POST /session/{key}/{action}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ActionResponse {
    pub fn server_error(&self) -> Option<&str> {
        non_empty(&self.error)
    }
}

// `"error": ""` and `"logs": null` both mean "nothing there".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// State transitions the backend accepts for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionAction {
    Pause,
    Resume,
    Stop,
}

impl SessionAction {
    pub const ALL: [SessionAction; 3] = [SessionAction::Pause, SessionAction::Resume, SessionAction::Stop];

    /// Path segment used in `POST /session/{key}/{action}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Pause => "pause",
            SessionAction::Resume => "resume",
            SessionAction::Stop => "stop",
        }
    }

    /// Used in the confirmation message ("Session paused. ...").
    pub fn past_tense(&self) -> &'static str {
        match self {
            SessionAction::Pause => "paused",
            SessionAction::Resume => "resumed",
            SessionAction::Stop => "stopped",
        }
    }
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionAction {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        SessionAction::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| PanelError::UnknownAction(s.trim().to_string()))
    }
}
