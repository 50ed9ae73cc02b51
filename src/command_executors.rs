use std::rc::Rc;

use crate::dom_utils::{set_required, set_visible};
use crate::messages::{Command, Message};
use crate::network::SessionApi;
use crate::panel::Panel;
use crate::token_fields::TokenFieldState;
use crate::ui::TokenFieldElements;
use crate::{debug_log, error_log, warn_log};

impl<A: SessionApi + 'static> Panel<A> {
    pub(crate) fn execute(self: &Rc<Self>, cmd: Command) {
        match cmd {
            Command::FetchStatus { key, seq } => {
                let panel = Rc::clone(self);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = panel.api.get_status(&key).await;
                    if let Err(e) = &result {
                        warn_log!("status fetch for {} failed: {}", key, e);
                    }
                    panel.dispatch(Message::StatusLoaded { seq, result });
                });
            }

            Command::PostAction { key, action } => {
                let panel = Rc::clone(self);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = panel.api.post_action(&key, action).await;
                    if let Err(e) = &result {
                        warn_log!("{} on {} failed: {}", action, key, e);
                    }
                    panel.dispatch(Message::ActionCompleted { action, result });
                });
            }

            Command::RenderStatus(html) => match &self.elements().status_box {
                Some(status_box) => status_box.set_inner_html(&html),
                None => error_log!("status box missing, dropping render"),
            },

            Command::RefreshStatus => self.check_status(),

            Command::Notify { message, kind } => {
                debug_log!("notify {:?}: {}", kind, message);
                self.notifier().notify(&message, kind);
            }

            Command::ApplyTokenFields(fields) => match &self.elements().token_fields {
                Some(elements) => apply_token_fields(elements, fields),
                None => debug_log!("no token fields on this page"),
            },
        }
    }
}

fn apply_token_fields(elements: &TokenFieldElements, fields: TokenFieldState) {
    if let Some(group) = &elements.multi_group {
        set_visible(group, fields.multi_group_visible);
    }
    if let Some(group) = &elements.single_group {
        set_visible(group, fields.single_group_visible);
    }
    if let Some(input) = &elements.token_file {
        set_required(input, fields.token_file_required);
    }
    if let Some(input) = &elements.access_token {
        set_required(input, fields.access_token_required);
    }
}

// ---------------------------------------------------------------------------
// wasm-bindgen tests: executors against real DOM nodes, a stub API and a
// recording notifier
// ---------------------------------------------------------------------------

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::config::PanelConfig;
    use crate::models::{ActionResponse, LogEntry, SessionAction, SessionStatus};
    use crate::network::api_client::testing::StubApi;
    use crate::notifier::testing::RecordingNotifier;
    use crate::notifier::NotifyKind;
    use crate::ui::PanelElements;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlSelectElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn status_elements(key: &str) -> PanelElements {
        let doc = document();
        let input: HtmlInputElement = doc.create_element("input").unwrap().unchecked_into();
        input.set_value(key);
        PanelElements {
            session_input: Some(input),
            status_box: Some(doc.create_element("div").unwrap()),
            token_fields: None,
            form: None,
        }
    }

    fn panel(elements: PanelElements, api: StubApi) -> (Rc<Panel<StubApi>>, RecordingNotifier) {
        let rec = RecordingNotifier::default();
        let panel = Panel::with_notifier(elements, api, Box::new(rec.clone()), &PanelConfig::default());
        (panel, rec)
    }

    async fn settle() {
        TimeoutFuture::new(0).await;
        TimeoutFuture::new(0).await;
    }

    #[wasm_bindgen_test]
    async fn empty_key_alerts_without_request() {
        let (panel, rec) = panel(status_elements("   "), StubApi::default());
        panel.check_status();
        panel.session_action("pause");
        settle().await;

        assert!(panel.api.status_calls.borrow().is_empty());
        assert!(panel.api.action_calls.borrow().is_empty());
        let calls = rec.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(m, k)| m == "Enter a session key!" && *k == NotifyKind::Error));
    }

    #[wasm_bindgen_test]
    async fn status_is_rendered_into_the_box() {
        let api = StubApi::default();
        *api.status.borrow_mut() = Some(Ok(SessionStatus {
            status: Some("running".into()),
            logs: vec![
                LogEntry { message: "m1".into(), status: Some("ok".into()), error: None },
                LogEntry { message: "m2".into(), status: None, error: Some("fail".into()) },
            ],
            error: None,
        }));
        let (panel, rec) = panel(status_elements("abc123"), api);

        panel.check_status();
        settle().await;

        assert_eq!(*panel.api.status_calls.borrow(), vec!["abc123".to_string()]);
        let html = panel.elements().status_box.as_ref().unwrap().inner_html();
        assert!(html.contains("<strong>running</strong>"));
        assert!(html.contains("m1 =&gt; Status: ok"));
        assert!(html.contains("m2 =&gt; ERROR: fail"));
        assert!(rec.calls.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    async fn pause_confirms_and_refreshes() {
        let api = StubApi::default();
        *api.action.borrow_mut() = Some(Ok(ActionResponse { status: Some("paused".into()), error: None }));
        *api.status.borrow_mut() = Some(Ok(SessionStatus { status: Some("paused".into()), ..Default::default() }));
        let (panel, rec) = panel(status_elements("abc123"), api);

        panel.session_action("pause");
        settle().await;

        assert_eq!(
            *panel.api.action_calls.borrow(),
            vec![("abc123".to_string(), SessionAction::Pause)]
        );
        assert_eq!(
            rec.calls.borrow()[0],
            ("Session paused. Current status: paused".to_string(), NotifyKind::Success)
        );
        assert_eq!(panel.api.status_calls.borrow().len(), 1);
        let html = panel.elements().status_box.as_ref().unwrap().inner_html();
        assert!(html.contains("<strong>paused</strong>"));
    }

    #[wasm_bindgen_test]
    async fn token_fields_follow_the_select() {
        let doc = document();
        let select: HtmlSelectElement = doc.create_element("select").unwrap().unchecked_into();
        for value in ["single", "multi"] {
            let opt = doc.create_element("option").unwrap();
            opt.set_attribute("value", value).unwrap();
            select.append_child(&opt).unwrap();
        }
        let div = || -> HtmlElement { doc.create_element("div").unwrap().unchecked_into() };
        let tf = TokenFieldElements {
            select: select.clone(),
            token_file: Some(doc.create_element("input").unwrap()),
            access_token: Some(doc.create_element("input").unwrap()),
            multi_group: Some(div()),
            single_group: Some(div()),
        };
        let elements = PanelElements { token_fields: Some(tf.clone()), ..Default::default() };
        let (panel, _rec) = panel(elements, StubApi::default());

        select.set_value("multi");
        panel.update_token_fields();
        let display = |el: &Option<HtmlElement>| el.as_ref().unwrap().style().get_property_value("display").unwrap();
        assert_eq!(display(&tf.multi_group), "block");
        assert_eq!(display(&tf.single_group), "none");
        assert!(tf.token_file.as_ref().unwrap().has_attribute("required"));
        assert!(!tf.access_token.as_ref().unwrap().has_attribute("required"));

        select.set_value("single");
        panel.update_token_fields();
        assert_eq!(display(&tf.multi_group), "none");
        assert_eq!(display(&tf.single_group), "block");
        assert!(!tf.token_file.as_ref().unwrap().has_attribute("required"));
        assert!(tf.access_token.as_ref().unwrap().has_attribute("required"));
    }
}
