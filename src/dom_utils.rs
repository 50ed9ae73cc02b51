//! Thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for the show / hide / required / read-value patterns the
//! panel needs, so the executors don't sprinkle `set_attribute` calls and
//! `dyn_into` casts across the code-base.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// Look up an element by id and cast it to the requested type.  `None` when
/// the element is missing or is of a different type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Toggle an element's inline `display` between `block` and `none`.
pub fn set_visible(el: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    let _ = el.style().set_property("display", display);
}

/// Add or remove the boolean `required` attribute.
pub fn set_required(el: &Element, required: bool) {
    if required {
        let _ = el.set_attribute("required", "");
    } else {
        let _ = el.remove_attribute("required");
    }
}

/// Current value of an optional `<input>`; missing inputs read as empty.
pub fn input_value(input: Option<&HtmlInputElement>) -> String {
    input.map(|i| i.value()).unwrap_or_default()
}

/// Whether an optional `<input type="file">` has at least one file selected.
pub fn has_file(input: Option<&HtmlInputElement>) -> bool {
    input
        .and_then(|i| i.files())
        .map(|files| files.length() > 0)
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// wasm-bindgen tests
// ---------------------------------------------------------------------------

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn visibility_round_trip() {
        let el: HtmlElement = document().create_element("div").unwrap().unchecked_into();
        set_visible(&el, false);
        assert_eq!(el.style().get_property_value("display").unwrap(), "none");
        set_visible(&el, true);
        assert_eq!(el.style().get_property_value("display").unwrap(), "block");
    }

    #[wasm_bindgen_test]
    fn required_attribute_toggles() {
        let el = document().create_element("input").unwrap();
        set_required(&el, true);
        assert!(el.has_attribute("required"));
        set_required(&el, false);
        assert!(!el.has_attribute("required"));
    }

    #[wasm_bindgen_test]
    fn missing_inputs_read_empty() {
        assert_eq!(input_value(None), "");
        assert!(!has_file(None));

        let file_input: HtmlInputElement = document().create_element("input").unwrap().unchecked_into();
        file_input.set_type("file");
        assert!(!has_file(Some(&file_input)));
    }
}
