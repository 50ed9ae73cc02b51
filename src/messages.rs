// The events that can occur in the panel and the side effects the reducer
// asks the executors to perform.

use crate::error::PanelError;
use crate::form_validation::FormError;
use crate::models::{ActionResponse, SessionAction, SessionKey, SessionStatus};
use crate::notifier::NotifyKind;
use crate::token_fields::TokenFieldState;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Status poller
    CheckStatus { raw_key: String },   // Explicit refresh; alerts on an empty key
    PollTick { raw_key: String },      // Timer refresh; silent on an empty key
    StatusLoaded {
        seq: u64,
        result: Result<SessionStatus, PanelError>,
    },

    // Action dispatcher
    RequestAction { raw_key: String, action: String },
    ActionCompleted {
        action: SessionAction,
        result: Result<ActionResponse, PanelError>,
    },

    // Submission form
    TokenTypeChanged { value: String }, // Also sent once at mount
    FormRejected(FormError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `GET /session/{key}`; the result comes back as `StatusLoaded { seq }`
    FetchStatus { key: SessionKey, seq: u64 },

    /// `POST /session/{key}/{action}`
    PostAction { key: SessionKey, action: SessionAction },

    /// Replace the status box contents
    RenderStatus(String),

    /// Re-read the key input and check status again
    RefreshStatus,

    Notify { message: String, kind: NotifyKind },

    ApplyTokenFields(TokenFieldState),
}

impl Command {
    pub fn notify_error(message: impl Into<String>) -> Self {
        Command::Notify { message: message.into(), kind: NotifyKind::Error }
    }
}
