//! Auto-refresh timer for the status box.
//!
//! Wraps a `gloo_timers` interval.  Dropping the `PollTimer` cancels the
//! interval, so replacing the panel's timer on reconfiguration never leaves
//! a second one running.  Callers decide whether polling is enabled at all.  The timer does not wait for in-flight requests;
//! overlapping responses are sorted out by the status sequence guard.

use gloo_timers::callback::Interval;

use crate::debug_log;

pub struct PollTimer {
    _interval: Interval,
}

impl PollTimer {
    /// Start calling `tick` every `period_ms`.
    pub fn start<F>(period_ms: u32, tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        debug_log!("auto-refresh every {} ms", period_ms);
        Self {
            _interval: Interval::new(period_ms, tick),
        }
    }
}
