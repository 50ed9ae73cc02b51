use crate::constants::DEFAULT_LOG_LIMIT;
use crate::token_fields::TokenMode;

/// Mutable view-state of the panel.  Element handles and collaborators live
/// on `Panel`; this struct holds only what the reducer reads and writes.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    // Sequence number of the most recently issued status request.  Responses
    // carrying an older number are stale and never rendered.
    pub status_seq: u64,
    // Number of action requests started and not yet completed.
    pub actions_in_flight: u32,
    // Last evaluated token mode (None until the form is mounted)
    pub token_mode: Option<TokenMode>,
    pub log_limit: usize,
}

impl PanelState {
    pub fn new(log_limit: usize) -> Self {
        Self {
            status_seq: 0,
            actions_in_flight: 0,
            token_mode: None,
            log_limit,
        }
    }

    /// Stamp a new status request and return its sequence number.
    pub fn next_status_seq(&mut self) -> u64 {
        self.status_seq = self.status_seq.wrapping_add(1);
        self.status_seq
    }

    pub fn is_latest_status(&self, seq: u64) -> bool {
        seq == self.status_seq
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LIMIT)
    }
}
