use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::config::PanelConfig;
use crate::constants::*;
use crate::dom_utils::{by_id, has_file, input_value};
use crate::form_validation::FormSnapshot;
use crate::network::{self, FetchSessionApi};
use crate::panel::{self as panel_rt, Panel};
use crate::token_fields::TokenMode;
use crate::ui::events;
use crate::{debug_log, warn_log};

/// Element handles resolved once at mount and handed to the panel.  Every
/// handle is optional: pages may carry only the status panel, only the
/// submission form, or both.
#[derive(Clone, Default)]
pub struct PanelElements {
    pub session_input: Option<HtmlInputElement>,
    pub status_box: Option<Element>,
    pub token_fields: Option<TokenFieldElements>,
    pub form: Option<SubmissionFormElements>,
}

/// The `tokenType` select and the two groups it switches between.
#[derive(Clone)]
pub struct TokenFieldElements {
    pub select: HtmlSelectElement,
    pub token_file: Option<Element>,
    pub access_token: Option<Element>,
    pub multi_group: Option<HtmlElement>,
    pub single_group: Option<HtmlElement>,
}

/// The submission form owning `tokenType` and the inputs validated on submit.
#[derive(Clone)]
pub struct SubmissionFormElements {
    pub form: HtmlFormElement,
    pub thread_id: Option<HtmlInputElement>,
    pub sender_name: Option<HtmlInputElement>,
    pub time_interval: Option<HtmlInputElement>,
    pub message_file: Option<HtmlInputElement>,
    pub token_file: Option<HtmlInputElement>,
    pub access_token: Option<HtmlInputElement>,
}

impl PanelElements {
    pub fn resolve(document: &Document) -> Self {
        let token_fields = by_id::<HtmlSelectElement>(document, ID_TOKEN_TYPE).map(|select| {
            TokenFieldElements {
                select,
                token_file: document.get_element_by_id(ID_TOKEN_FILE),
                access_token: document.get_element_by_id(ID_ACCESS_TOKEN),
                multi_group: by_id(document, ID_MULTI_TOKEN_GROUP),
                single_group: by_id(document, ID_ACCESS_TOKEN_GROUP),
            }
        });

        let form = token_fields
            .as_ref()
            .and_then(|tf| tf.select.form())
            .map(|form| SubmissionFormElements {
                form,
                thread_id: by_id(document, ID_THREAD_ID),
                sender_name: by_id(document, ID_SENDER_NAME),
                time_interval: by_id(document, ID_TIME_INTERVAL),
                message_file: by_id(document, ID_MESSAGE_FILE),
                token_file: by_id(document, ID_TOKEN_FILE),
                access_token: by_id(document, ID_ACCESS_TOKEN),
            });

        Self {
            session_input: by_id(document, ID_SESSION_KEY_INPUT),
            status_box: document.get_element_by_id(ID_SESSION_STATUS_BOX),
            token_fields,
            form,
        }
    }

    pub fn has_status_panel(&self) -> bool {
        self.session_input.is_some() && self.status_box.is_some()
    }
}

impl SubmissionFormElements {
    /// Read the current form values.  `mode` comes from the `tokenType`
    /// select at submit time.
    pub fn snapshot(&self, mode: TokenMode) -> FormSnapshot {
        FormSnapshot {
            token_mode: mode,
            thread_id: input_value(self.thread_id.as_ref()),
            sender_name: input_value(self.sender_name.as_ref()),
            time_interval: input_value(self.time_interval.as_ref()),
            access_token: input_value(self.access_token.as_ref()),
            has_message_file: has_file(self.message_file.as_ref()),
            has_token_file: has_file(self.token_file.as_ref()),
        }
    }
}

/// Resolve the page's elements, build the panel, wire its listeners, start
/// auto-refresh and evaluate the token fields once.
pub fn mount(document: &Document, config: PanelConfig) -> Result<Rc<Panel<FetchSessionApi>>, JsValue> {
    if let Some(url) = &config.api_base_url {
        network::init_api_config_js(url)?;
    }

    let elements = PanelElements::resolve(document);
    if !elements.has_status_panel() {
        warn_log!(
            "#{} or #{} missing, session status panel disabled",
            ID_SESSION_KEY_INPUT,
            ID_SESSION_STATUS_BOX
        );
    }
    if elements.token_fields.is_none() {
        debug_log!("no #{} select on this page", ID_TOKEN_TYPE);
    }

    let panel = Panel::new(elements, FetchSessionApi, &config);
    events::install_listeners(&panel, document)?;
    if panel.elements().has_status_panel() {
        panel.start_polling(&config);
    }
    panel.update_token_fields();

    panel_rt::install(Rc::clone(&panel));
    Ok(panel)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    const FORM_MARKUP: &str = r#"
        <form>
          <select id="tokenType">
            <option value="single">single</option>
            <option value="multi" selected>multi</option>
          </select>
          <div id="multiTokenFile"><input type="file" id="tokenFile"></div>
          <div id="accessTokenField"><input type="text" id="accessToken"></div>
        </form>"#;

    fn display(el: &Option<HtmlElement>) -> String {
        el.as_ref().unwrap().style().get_property_value("display").unwrap()
    }

    #[wasm_bindgen_test]
    fn mount_applies_token_fields_the_same_as_a_change() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(FORM_MARKUP);
        document.body().unwrap().append_child(&root).unwrap();

        let config = PanelConfig { poll_interval_ms: 0, ..PanelConfig::default() };
        let panel = mount(&document, config).unwrap();
        let elements = panel.elements().clone();
        assert!(!elements.has_status_panel());
        assert!(elements.form.is_some());
        let tf = elements.token_fields.unwrap();
        let token_file = tf.token_file.clone().unwrap();
        let access_token = tf.access_token.clone().unwrap();

        // Evaluated once at load from the preselected option.
        assert_eq!(display(&tf.multi_group), "block");
        assert_eq!(display(&tf.single_group), "none");
        assert!(token_file.has_attribute("required"));
        assert!(!access_token.has_attribute("required"));

        tf.select.set_value("single");
        tf.select.dispatch_event(&Event::new("change").unwrap()).unwrap();
        assert_eq!(display(&tf.multi_group), "none");
        assert_eq!(display(&tf.single_group), "block");
        assert!(!token_file.has_attribute("required"));
        assert!(access_token.has_attribute("required"));

        tf.select.set_value("multi");
        tf.select.dispatch_event(&Event::new("change").unwrap()).unwrap();
        assert_eq!(display(&tf.multi_group), "block");
        assert!(token_file.has_attribute("required"));

        root.remove();
    }
}
