//! Pre-submit checks for the token submission form.
//!
//! These mirror the server-side checks of the submission handler so the
//! user gets the same message without a round trip.  The first failing rule
//! wins.

use std::fmt;

use crate::token_fields::TokenMode;

/// Values read from the form at submit time.  Missing elements read as
/// empty strings / no file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub token_mode: TokenMode,
    pub thread_id: String,
    pub sender_name: String,
    pub time_interval: String,
    pub access_token: String,
    pub has_message_file: bool,
    pub has_token_file: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingRequiredFields,
    MissingMessageFile,
    MissingTokenFile,
    MissingAccessToken,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FormError::MissingRequiredFields => "Please fill required fields.",
            FormError::MissingMessageFile => "Please upload a message file.",
            FormError::MissingTokenFile => "Token type is multi but no token file uploaded.",
            FormError::MissingAccessToken => "Please provide an access token.",
        };
        f.write_str(msg)
    }
}

pub fn validate(form: &FormSnapshot) -> Result<(), FormError> {
    let blank = |s: &str| s.trim().is_empty();

    if blank(&form.thread_id) || blank(&form.sender_name) || blank(&form.time_interval) {
        return Err(FormError::MissingRequiredFields);
    }
    if !form.has_message_file {
        return Err(FormError::MissingMessageFile);
    }
    match form.token_mode {
        TokenMode::Multi if !form.has_token_file => Err(FormError::MissingTokenFile),
        TokenMode::Single if blank(&form.access_token) => Err(FormError::MissingAccessToken),
        _ => Ok(()),
    }
}
