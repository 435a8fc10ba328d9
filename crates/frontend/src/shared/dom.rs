//! Small wrappers over `web_sys` queries. Every helper tolerates missing
//! elements: a failed query yields `None` or an empty list.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Show or hide with an inline `display` style.
pub fn set_visible(element: &Element, visible: bool) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html
            .style()
            .set_property("display", if visible { "block" } else { "none" });
    }
}

/// Disable through the `disabled` attribute; works for any button-like
/// element without casting.
pub fn set_disabled(element: &Element, disabled: bool) {
    let _ = element.toggle_attribute_with_force("disabled", disabled);
}

pub fn is_disabled(element: &Element) -> bool {
    element.has_attribute("disabled")
}

pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn remove_classes(element: &Element, classes: &[&str]) {
    for class in classes {
        let _ = element.class_list().remove_1(class);
    }
}

/// Nearest ancestor (or self) matching `selector`, stopping at `boundary`.
pub fn closest_within(start: &Element, selector: &str, boundary: &Element) -> Option<Element> {
    let found = start.closest(selector).ok().flatten()?;
    let node: &web_sys::Node = &found;
    if boundary.contains(Some(node)) {
        Some(found)
    } else {
        None
    }
}
