//! Yes/no selectors: `.check-option` elements sharing a parent.

use crate::shared::dom;
use contracts::domain::binary_choice::{Choice, ChoiceGroup, ALL_SELECTION_CLASSES};
use wasm_bindgen::JsValue;
use web_sys::Element;

pub const CHECK_OPTION_SELECTOR: &str = ".check-option";

/// `.check-option` elements under `container`, grouped by parent element in
/// document order. Each inner list is one yes/no selector.
pub fn option_sets(container: &Element) -> Vec<Vec<Element>> {
    let mut sets: Vec<(Element, Vec<Element>)> = Vec::new();
    for option in dom::query_all(container, CHECK_OPTION_SELECTOR) {
        let Some(parent) = option.parent_element() else {
            continue;
        };
        match sets.iter_mut().find(|(p, _)| *p == parent) {
            Some((_, options)) => options.push(option),
            None => sets.push((parent, vec![option])),
        }
    }
    sets.into_iter().map(|(_, options)| options).collect()
}

/// Selector state read from the options' `data-value` attributes.
pub fn choice_group(options: &[Element]) -> ChoiceGroup {
    ChoiceGroup::new(
        options
            .iter()
            .map(|el| Choice::from_data_value(el.get_attribute("data-value").as_deref()))
            .collect(),
    )
}

/// Mirror `group` onto its option elements.
pub fn render(options: &[Element], group: &ChoiceGroup) {
    for (index, option) in options.iter().enumerate() {
        dom::remove_classes(option, &ALL_SELECTION_CLASSES);
        if let Some(class) = group.class_for(index) {
            let _ = option.class_list().add_1(class);
        }
    }
}

/// Mark a standalone `option` (outside any card group) and unmark its
/// siblings.
pub fn select_option(option: &Element) {
    let Some(parent) = option.parent_element() else {
        return;
    };
    let siblings: Vec<Element> = dom::query_all(&parent, CHECK_OPTION_SELECTOR)
        .into_iter()
        .filter(|el| el.parent_element().as_ref() == Some(&parent))
        .collect();
    let Some(clicked) = siblings.iter().position(|el| el == option) else {
        return;
    };

    let mut group = choice_group(&siblings);
    group.select(clicked);
    render(&siblings, &group);
    pulse(option);
}

/// Short press animation: scale 1 -> 0.95 -> 1 over 200ms.
pub fn pulse(element: &Element) {
    let frames = js_sys::Array::new();
    for scale in ["scale(1)", "scale(0.95)", "scale(1)"] {
        let frame = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&frame, &JsValue::from_str("transform"), &JsValue::from_str(scale));
        frames.push(&frame);
    }
    let keyframes: js_sys::Object = frames.into();
    if let Err(err) = element.animate_with_f64(Some(&keyframes), 200.0) {
        log::debug!("check-option animation unavailable: {:?}", err);
    }
}
