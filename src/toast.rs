//! Non-blocking toast notifications.
//! Creates a `#toast-root` container once per page and appends toast divs that
//! are removed again after a few seconds.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::notifier::NotifyKind;
use crate::warn_log;

const TOAST_LIFETIME_MS: i32 = 4000;

pub fn show(message: &str, kind: NotifyKind) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    if let Err(e) = try_show(&window, &document, message, kind) {
        warn_log!("toast failed ({:?}): {}", e, message);
    }
}

fn try_show(
    window: &web_sys::Window,
    document: &Document,
    message: &str,
    kind: NotifyKind,
) -> Result<(), JsValue> {
    ensure_styles(document)?;
    let root = ensure_root(document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name("toast");
    let modifier = match kind {
        NotifyKind::Success => "toast-success",
        NotifyKind::Error => "toast-error",
    };
    toast.class_list().add_1(modifier)?;
    toast.set_text_content(Some(message));

    // Prepend so newest appears on top.
    root.prepend_with_node_1(&toast)?;

    let toast_el: HtmlElement = toast.unchecked_into();
    let cb = Closure::once_into_js(move || {
        toast_el.remove();
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        TOAST_LIFETIME_MS,
    )?;
    Ok(())
}

fn ensure_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id("toast-root") {
        return Ok(el);
    }
    let root = document.create_element("div")?;
    root.set_id("toast-root");
    root.set_class_name("toast-root");
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&root)?;
    Ok(root)
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("toast-styles").is_some() {
        return Ok(());
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:Arial,Helvetica,sans-serif}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#16a34a}
.toast-error{background:#dc2626}
@keyframes toast-in{to{opacity:1}}
";

    let style = document.create_element("style")?;
    style.set_id("toast-styles");
    style.set_text_content(Some(css));
    match document.query_selector("head")? {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&style)?,
    };
    Ok(())
}
