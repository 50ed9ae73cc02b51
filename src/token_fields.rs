//! Token field toggling for the submission form.
//!
//! The `tokenType` select decides which of two mutually exclusive field
//! groups is shown: the multi-token file upload or the single access token.
//! The visible group's input is the required one.  The state is recomputed
//! from the select value every time, so load and change behave identically.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenMode {
    Multi,
    Single,
}

impl TokenMode {
    /// Only the literal `multi` selects multi mode.
    pub fn from_select_value(value: &str) -> Self {
        if value == "multi" {
            TokenMode::Multi
        } else {
            TokenMode::Single
        }
    }
}

/// Visibility and required flags for the two token field groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenFieldState {
    pub multi_group_visible: bool,
    pub single_group_visible: bool,
    pub token_file_required: bool,
    pub access_token_required: bool,
}

impl TokenFieldState {
    pub fn for_mode(mode: TokenMode) -> Self {
        let multi = mode == TokenMode::Multi;
        Self {
            multi_group_visible: multi,
            single_group_visible: !multi,
            token_file_required: multi,
            access_token_required: !multi,
        }
    }
}
