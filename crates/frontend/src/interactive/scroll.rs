use contracts::shared::anchor::scroll_target;
use wasm_bindgen::JsValue;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Smoothly scroll to the anchor's target and record it in history without
/// the native jump. Links without a matching element are left alone.
pub fn follow_anchor(anchor: &Element, event: &Event) {
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let Some(id) = scroll_target(&href) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };

    event.prevent_default();

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
    }
}
