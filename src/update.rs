// The panel reducer.
//
// `update` never touches the DOM or the network: it validates input, moves
// `PanelState` forward and pushes `Command`s for the executors.  That keeps
// every branch of the poller, dispatcher and toggler testable on the host.

use crate::constants::{MSG_EMPTY_SESSION_KEY, MSG_UNKNOWN_STATUS};
use crate::debug_log;
use crate::messages::{Command, Message};
use crate::models::{SessionAction, SessionKey};
use crate::notifier::NotifyKind;
use crate::state::PanelState;
use crate::token_fields::{TokenFieldState, TokenMode};
use crate::views;

pub fn update(state: &mut PanelState, msg: Message, commands: &mut Vec<Command>) {
    match msg {
        Message::CheckStatus { raw_key } => match SessionKey::parse(&raw_key) {
            Ok(key) => request_status(state, key, commands),
            Err(_) => commands.push(Command::notify_error(MSG_EMPTY_SESSION_KEY)),
        },

        Message::PollTick { raw_key } => {
            // Auto-refresh only runs while a key is present; no alert otherwise.
            if let Ok(key) = SessionKey::parse(&raw_key) {
                request_status(state, key, commands);
            }
        }

        Message::StatusLoaded { seq, result } => {
            if !state.is_latest_status(seq) {
                debug_log!(
                    "dropping stale status response seq={} latest={}",
                    seq,
                    state.status_seq
                );
                return;
            }
            let html = match result {
                Ok(status) => views::render_status(&status, state.log_limit),
                Err(err) => views::render_fetch_failure(&err),
            };
            commands.push(Command::RenderStatus(html));
        }

        Message::RequestAction { raw_key, action } => {
            let key = match SessionKey::parse(&raw_key) {
                Ok(key) => key,
                Err(_) => {
                    commands.push(Command::notify_error(MSG_EMPTY_SESSION_KEY));
                    return;
                }
            };
            let action = match action.parse::<SessionAction>() {
                Ok(action) => action,
                Err(err) => {
                    commands.push(Command::notify_error(err.to_string()));
                    return;
                }
            };
            state.actions_in_flight += 1;
            commands.push(Command::PostAction { key, action });
        }

        Message::ActionCompleted { action, result } => {
            state.actions_in_flight = state.actions_in_flight.saturating_sub(1);
            match result {
                Ok(resp) => match resp.server_error() {
                    Some(err) => commands.push(Command::notify_error(format!("Error: {}", err))),
                    None => {
                        let status = resp.status.as_deref().unwrap_or(MSG_UNKNOWN_STATUS);
                        commands.push(Command::Notify {
                            message: format!(
                                "Session {}. Current status: {}",
                                action.past_tense(),
                                status
                            ),
                            kind: NotifyKind::Success,
                        });
                        commands.push(Command::RefreshStatus);
                    }
                },
                Err(err) => {
                    commands.push(Command::notify_error(format!("Error performing action: {}", err)))
                }
            }
        }

        Message::TokenTypeChanged { value } => {
            let mode = TokenMode::from_select_value(&value);
            state.token_mode = Some(mode);
            commands.push(Command::ApplyTokenFields(TokenFieldState::for_mode(mode)));
        }

        Message::FormRejected(err) => commands.push(Command::notify_error(err.to_string())),
    }
}

fn request_status(state: &mut PanelState, key: SessionKey, commands: &mut Vec<Command>) {
    let seq = state.next_status_seq();
    commands.push(Command::FetchStatus { key, seq });
}
