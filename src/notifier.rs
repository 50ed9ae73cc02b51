//! User notification seam.
//!
//! Validation failures, server-reported errors and action confirmations all
//! go through a `Notifier`.  The default implementation uses blocking
//! `window.alert()` dialogs; pages that prefer non-blocking feedback can
//! switch to toasts through `configurePanel`.  Tests inject a recorder.

use serde::{Deserialize, Serialize};

use crate::toast;
use crate::warn_log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

pub trait Notifier {
    fn notify(&self, message: &str, kind: NotifyKind);
}

/// Which notifier `Panel::mount` installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStyle {
    #[default]
    Alert,
    Toast,
}

impl NotificationStyle {
    pub fn build(self) -> Box<dyn Notifier> {
        match self {
            NotificationStyle::Alert => Box::new(AlertNotifier),
            NotificationStyle::Toast => Box::new(ToastNotifier),
        }
    }
}

/// Blocking browser dialog.  Halts script execution until dismissed but does
/// not affect fetches already in flight.
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str, _kind: NotifyKind) {
        let Some(window) = web_sys::window() else {
            warn_log!("no window for alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            warn_log!("alert failed: {:?}", e);
        }
    }
}

pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, kind: NotifyKind) {
        toast::show(message, kind);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every notification instead of showing it.
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        pub calls: Rc<RefCell<Vec<(String, NotifyKind)>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, kind: NotifyKind) {
            self.calls.borrow_mut().push((message.to_string(), kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingNotifier;
    use super::*;

    #[test]
    fn recorder_keeps_order_and_kind() {
        let rec = RecordingNotifier::default();
        let notifier: &dyn Notifier = &rec;
        notifier.notify("Enter a session key!", NotifyKind::Error);
        notifier.notify("Session paused. Current status: paused", NotifyKind::Success);

        let calls = rec.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], ("Enter a session key!".to_string(), NotifyKind::Error));
        assert_eq!(calls[1].1, NotifyKind::Success);
    }

    #[test]
    fn style_deserialises_from_lowercase() {
        let style: NotificationStyle = serde_json::from_str("\"toast\"").unwrap();
        assert_eq!(style, NotificationStyle::Toast);
        assert_eq!(NotificationStyle::default(), NotificationStyle::Alert);
    }
}
