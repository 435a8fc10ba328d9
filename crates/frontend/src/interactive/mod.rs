//! Behaviour for an injected content fragment.
//!
//! [`InteractiveHandle::bind`] runs once per fragment: it discovers the
//! contraindication tabs and card groups, renders their initial state and
//! installs two listeners (delegated clicks on the content root, keydown on
//! the document). Dropping the handle removes both listeners and discards
//! all widget state; nothing is carried over to the next fragment.

pub mod card_group;
pub mod choice;
pub mod scroll;

use crate::shared::dom;
use card_group::{CardGroupView, DOT_SELECTOR, GROUP_SELECTOR, NEXT_SELECTOR, PREV_SELECTOR};
use choice::CHECK_OPTION_SELECTOR;
use contracts::domain::card_browser::Transition;
use contracts::domain::contra_section::ContraSection;
use contracts::domain::keyboard::{is_editable_target, nav_command_for_key};
use contracts::domain::tab_set::TabSet;
use contracts::shared::language::Language;
use leptos::prelude::*;
use scroll::ANCHOR_SELECTOR;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement, KeyboardEvent};

const TAB_SELECTOR: &str = ".contra-tab";

struct InteractiveState {
    root: Element,
    tabs: Vec<Element>,
    section: ContraSection,
    /// Index-aligned with `section.groups()`.
    views: Vec<CardGroupView>,
}

impl InteractiveState {
    fn discover(root: Element) -> Self {
        let tabs = dom::query_all(&root, TAB_SELECTOR);
        let targets: Vec<String> = tabs
            .iter()
            .map(|t| t.get_attribute("data-tab").unwrap_or_default())
            .collect();
        let marked = tabs
            .iter()
            .zip(&targets)
            .find(|(tab, _)| tab.class_list().contains("active"))
            .map(|(_, target)| target.as_str());
        let tab_set = TabSet::new(targets.clone(), marked);

        let (views, groups): (Vec<_>, Vec<_>) = dom::query_all(&root, GROUP_SELECTOR)
            .into_iter()
            .map(CardGroupView::bind)
            .unzip();
        let marked_group = views.iter().position(CardGroupView::is_active);
        let section = ContraSection::new(tab_set, groups, marked_group);

        for (view, state) in views.iter().zip(section.groups()) {
            view.render(state);
        }

        log::debug!(
            "bound {} tab(s) and {} card group(s)",
            section.tabs().len(),
            views.len()
        );

        Self {
            root,
            tabs,
            section,
            views,
        }
    }

    fn group_index(&self, element: &Element) -> Option<usize> {
        let container = dom::closest_within(element, GROUP_SELECTOR, &self.root)?;
        self.views.iter().position(|v| v.container() == &container)
    }

    fn apply(&self, index: usize, transition: Option<Transition>) {
        if let (Some(view), Some(state)) = (self.views.get(index), self.section.group(index)) {
            view.apply(state, transition);
        }
    }

    /// Activate a tab, show only its group and rewind that group.
    fn activate_tab(&mut self, tab: &Element) {
        let Some(target) = tab.get_attribute("data-tab") else {
            return;
        };
        let Some(switch) = self.section.activate_tab(&target) else {
            return;
        };
        for (index, tab) in self.tabs.iter().enumerate() {
            dom::toggle_class(tab, "active", index == switch.current);
        }
        for (index, view) in self.views.iter().enumerate() {
            let active = self.section.is_group_active(index);
            view.set_active(active);
            if active {
                if let Some(state) = self.section.group(index) {
                    view.render(state);
                }
            }
        }
    }

    fn on_click(&mut self, event: &Event) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let root = self.root.clone();

        if let Some(tab) = dom::closest_within(&target, TAB_SELECTOR, &root) {
            self.activate_tab(&tab);
        } else if let Some(btn) = dom::closest_within(&target, PREV_SELECTOR, &root) {
            if dom::is_disabled(&btn) {
                return;
            }
            if let Some(index) = self.group_index(&btn) {
                let transition = self.section.group_mut(index).and_then(|g| g.show_previous());
                self.apply(index, transition);
            }
        } else if let Some(btn) = dom::closest_within(&target, NEXT_SELECTOR, &root) {
            if dom::is_disabled(&btn) {
                return;
            }
            if let Some(index) = self.group_index(&btn) {
                let transition = self.section.group_mut(index).and_then(|g| g.show_next());
                self.apply(index, transition);
            }
        } else if let Some(dot) = dom::closest_within(&target, DOT_SELECTOR, &root) {
            let Some(index) = self.group_index(&dot) else {
                return;
            };
            let Some(position) = self.views[index].dot_index(&dot) else {
                return;
            };
            let transition = self.section.group_mut(index).and_then(|g| g.jump_to(position));
            self.apply(index, transition);
        } else if let Some(option) = dom::closest_within(&target, CHECK_OPTION_SELECTOR, &root) {
            self.select_option(&option);
        } else if let Some(anchor) = dom::closest_within(&target, ANCHOR_SELECTOR, &root) {
            scroll::follow_anchor(&anchor, event);
        }
    }

    fn select_option(&mut self, option: &Element) {
        let located = self.group_index(option).and_then(|index| {
            let position = self.views[index].option_position(option)?;
            Some((index, position))
        });
        let Some((index, (set, clicked))) = located else {
            choice::select_option(option);
            return;
        };
        let Some(state) = self.section.group_mut(index) else {
            return;
        };
        if state.select_choice(set, clicked).is_some() {
            self.views[index].render_choices(state);
            choice::pulse(option);
        }
    }

    fn on_keydown(&mut self, event: &KeyboardEvent, language: Language) {
        if event_in_editable(event) {
            return;
        }
        let Some(command) = nav_command_for_key(&event.key(), language) else {
            return;
        };
        if let Some((index, transition)) = self.section.run_on_active(command) {
            self.apply(index, Some(transition));
        }
    }
}

fn event_in_editable(event: &KeyboardEvent) -> bool {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    let content_editable = element
        .dyn_ref::<HtmlElement>()
        .is_some_and(|el| el.is_content_editable());
    is_editable_target(&element.tag_name(), content_editable)
}

/// Owns the listeners and widget state of one injected fragment.
pub struct InteractiveHandle {
    root: Element,
    document: Option<EventTarget>,
    on_click: Closure<dyn FnMut(Event)>,
    on_keydown: Closure<dyn FnMut(Event)>,
}

impl InteractiveHandle {
    /// Bind every interactive component found under `root`. Call after the
    /// fragment has been fully injected.
    pub fn bind(root: Element, language: Signal<Language>) -> Self {
        let state = Rc::new(RefCell::new(InteractiveState::discover(root.clone())));

        let click_state = Rc::clone(&state);
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            click_state.borrow_mut().on_click(&event);
        }) as Box<dyn FnMut(Event)>);

        let key_state = state;
        let on_keydown = Closure::wrap(Box::new(move |event: Event| {
            let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let language = language.try_get_untracked().unwrap_or_default();
            key_state.borrow_mut().on_keydown(keyboard_event, language);
        }) as Box<dyn FnMut(Event)>);

        let _ = root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());

        let document: Option<EventTarget> = web_sys::window()
            .and_then(|w| w.document())
            .map(|d| d.into());
        if let Some(document) = &document {
            let _ = document
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }

        Self {
            root,
            document,
            on_click,
            on_keydown,
        }
    }
}

impl Drop for InteractiveHandle {
    fn drop(&mut self) {
        let _ = self
            .root
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        if let Some(document) = &self.document {
            let _ = document.remove_event_listener_with_callback(
                "keydown",
                self.on_keydown.as_ref().unchecked_ref(),
            );
        }
    }
}
