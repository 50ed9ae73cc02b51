//! The mounted panel: state, element handles, notifier and API client.
//!
//! `dispatch` runs the reducer with the state borrowed, releases the borrow,
//! then executes the resulting commands.  Commands may dispatch further
//! messages (directly or when a fetch resolves) without re-entering an
//! active borrow.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use crate::config::PanelConfig;
use crate::debug_log;
use crate::messages::Message;
use crate::mut_borrow;
use crate::network::{FetchSessionApi, SessionApi};
use crate::notifier::Notifier;
use crate::scheduling::PollTimer;
use crate::state::PanelState;
use crate::ui::PanelElements;
use crate::update::update;

pub struct Panel<A: SessionApi + 'static> {
    state: RefCell<PanelState>,
    elements: PanelElements,
    notifier: RefCell<Box<dyn Notifier>>,
    pub(crate) api: A,
    poll_timer: RefCell<Option<PollTimer>>,
}

impl<A: SessionApi + 'static> Panel<A> {
    pub fn new(elements: PanelElements, api: A, config: &PanelConfig) -> Rc<Self> {
        Self::with_notifier(elements, api, config.notifications.build(), config)
    }

    pub fn with_notifier(
        elements: PanelElements,
        api: A,
        notifier: Box<dyn Notifier>,
        config: &PanelConfig,
    ) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(PanelState::new(config.log_limit)),
            elements,
            notifier: RefCell::new(notifier),
            api,
            poll_timer: RefCell::new(None),
        })
    }

    pub fn dispatch(self: &Rc<Self>, msg: Message) {
        let mut commands = Vec::new();
        {
            let mut state = mut_borrow!(self.state);
            update(&mut state, msg, &mut commands);
        }
        for cmd in commands {
            self.execute(cmd);
        }
    }

    pub fn elements(&self) -> &PanelElements {
        &self.elements
    }

    pub(crate) fn notifier(&self) -> Ref<'_, Box<dyn Notifier>> {
        self.notifier.borrow()
    }

    /// Current (untrimmed) value of the session key input.
    pub fn session_key_value(&self) -> String {
        self.elements
            .session_input
            .as_ref()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    // ---------------------------------------------------------------------
    // Entry points used by the JS exports and the event listeners
    // ---------------------------------------------------------------------

    pub fn check_status(self: &Rc<Self>) {
        let raw_key = self.session_key_value();
        self.dispatch(Message::CheckStatus { raw_key });
    }

    pub fn session_action(self: &Rc<Self>, action: &str) {
        let raw_key = self.session_key_value();
        self.dispatch(Message::RequestAction { raw_key, action: action.to_string() });
    }

    /// Re-evaluate the token field groups from the select's current value.
    /// No-op on pages without a `tokenType` select.
    pub fn update_token_fields(self: &Rc<Self>) {
        if let Some(tf) = &self.elements.token_fields {
            let value = tf.select.value();
            self.dispatch(Message::TokenTypeChanged { value });
        }
    }

    /// (Re)start auto-refresh, or stop it when the configured period is 0.
    /// The timer holds only a weak reference so a dropped panel stops polling.
    pub fn start_polling(self: &Rc<Self>, config: &PanelConfig) {
        if !config.polling_enabled() {
            debug_log!("auto-refresh disabled");
            *mut_borrow!(self.poll_timer) = None;
            return;
        }
        let weak: Weak<Self> = Rc::downgrade(self);
        let timer = PollTimer::start(config.poll_interval_ms, move || {
            if let Some(panel) = weak.upgrade() {
                let raw_key = panel.session_key_value();
                panel.dispatch(Message::PollTick { raw_key });
            }
        });
        *mut_borrow!(self.poll_timer) = Some(timer);
    }

    /// Apply a runtime configuration: log limit, notifier and poll period.
    pub fn reconfigure(self: &Rc<Self>, config: &PanelConfig) {
        mut_borrow!(self.state).log_limit = config.log_limit;
        *mut_borrow!(self.notifier) = config.notifications.build();
        if self.elements.has_status_panel() {
            self.start_polling(config);
        }
    }
}

// ---------------------------------------------------------------------------
// The page's panel instance, reachable from the exported JS functions
// ---------------------------------------------------------------------------

thread_local! {
    static PANEL: RefCell<Option<Rc<Panel<FetchSessionApi>>>> = RefCell::new(None);
}

pub fn install(panel: Rc<Panel<FetchSessionApi>>) {
    PANEL.with(|cell| *mut_borrow!(cell) = Some(panel));
}

/// Run `f` against the mounted panel.  The `Rc` is cloned out first so `f`
/// may itself call `with_panel`.
pub fn with_panel<R>(f: impl FnOnce(&Rc<Panel<FetchSessionApi>>) -> R) -> Option<R> {
    let panel = PANEL.with(|cell| cell.borrow().clone())?;
    Some(f(&panel))
}
