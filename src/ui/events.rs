use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, MouseEvent};

use crate::constants::ATTR_SESSION_ACTION;
use crate::debug_log;
use crate::form_validation;
use crate::messages::Message;
use crate::network::SessionApi;
use crate::panel::Panel;
use crate::token_fields::TokenMode;

/// Wire the page's inputs to the panel.  Every closure holds a weak
/// reference; listeners live as long as the page and are forgotten, like the
/// rest of the frontend's handlers.
pub fn install_listeners<A: SessionApi + 'static>(
    panel: &Rc<Panel<A>>,
    document: &Document,
) -> Result<(), JsValue> {
    let elements = panel.elements().clone();

    // Enter in the key field checks status immediately
    if let Some(input) = &elements.session_input {
        let weak = Rc::downgrade(panel);
        let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                if let Some(panel) = weak.upgrade() {
                    panel.check_status();
                }
            }
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }

    // Buttons carrying data-session-action="pause|resume|stop"
    let buttons = document.query_selector_all(&format!("[{}]", ATTR_SESSION_ACTION))?;
    for i in 0..buttons.length() {
        let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        attach_action_button(panel, &button)?;
    }
    debug_log!("wired {} session action buttons", buttons.length());

    if let Some(tf) = &elements.token_fields {
        let weak = Rc::downgrade(panel);
        let on_change = Closure::wrap(Box::new(move |_: Event| {
            if let Some(panel) = weak.upgrade() {
                panel.update_token_fields();
            }
        }) as Box<dyn FnMut(_)>);
        tf.select
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
    }

    if let Some(form) = &elements.form {
        let weak = Rc::downgrade(panel);
        let on_submit = Closure::wrap(Box::new(move |e: Event| {
            if let Some(panel) = weak.upgrade() {
                validate_before_submit(&panel, &e);
            }
        }) as Box<dyn FnMut(_)>);
        form.form
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
    }

    Ok(())
}

fn attach_action_button<A: SessionApi + 'static>(
    panel: &Rc<Panel<A>>,
    button: &Element,
) -> Result<(), JsValue> {
    let weak: Weak<Panel<A>> = Rc::downgrade(panel);
    let target = button.clone();
    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
        e.prevent_default();
        // Read the attribute at click time so markup changes are honoured.
        let action = target.get_attribute(ATTR_SESSION_ACTION).unwrap_or_default();
        if let Some(panel) = weak.upgrade() {
            panel.session_action(&action);
        }
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Cancel the submit and tell the user why when the form is incomplete.
fn validate_before_submit<A: SessionApi + 'static>(panel: &Rc<Panel<A>>, event: &Event) {
    let elements = panel.elements();
    let (Some(form), Some(tf)) = (&elements.form, &elements.token_fields) else {
        return;
    };
    let mode = TokenMode::from_select_value(&tf.select.value());
    if let Err(err) = form_validation::validate(&form.snapshot(mode)) {
        event.prevent_default();
        panel.dispatch(Message::FormRejected(err));
    }
}
