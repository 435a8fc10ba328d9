//! DOM side of one `.contra-cards` group: cards, prev/next buttons, the
//! `current / total` counter, the jump dots and the nested yes/no options.
//! All state lives in a [`CardGroupState`]; this view only renders it.

use super::choice;
use crate::shared::dom;
use contracts::domain::card_browser::Transition;
use contracts::domain::contra_section::CardGroupState;
use web_sys::Element;

pub const GROUP_SELECTOR: &str = ".contra-cards";
const CARD_SELECTOR: &str = ".contra-card";
pub const PREV_SELECTOR: &str = ".nav-btn.prev-btn";
pub const NEXT_SELECTOR: &str = ".nav-btn.next-btn";
const CURRENT_SELECTOR: &str = ".current-card";
const TOTAL_SELECTOR: &str = ".total-cards";
pub const DOT_SELECTOR: &str = ".card-dot";

pub struct CardGroupView {
    container: Element,
    cards: Vec<Element>,
    prev_btn: Option<Element>,
    next_btn: Option<Element>,
    current_span: Option<Element>,
    total_span: Option<Element>,
    dots: Vec<Element>,
    option_sets: Vec<Vec<Element>>,
}

impl CardGroupView {
    /// Discover the group's parts and build the matching state, first card
    /// active and no answer marked.
    pub fn bind(container: Element) -> (Self, CardGroupState) {
        let cards = dom::query_all(&container, CARD_SELECTOR);
        for card in &cards {
            // focusable for keyboard users
            let _ = card.set_attribute("tabindex", "0");
        }
        let option_sets = choice::option_sets(&container);
        let state = CardGroupState::new(
            container.id(),
            cards.len(),
            option_sets.iter().map(|set| choice::choice_group(set)).collect(),
        );

        let view = Self {
            prev_btn: dom::query(&container, PREV_SELECTOR),
            next_btn: dom::query(&container, NEXT_SELECTOR),
            current_span: dom::query(&container, CURRENT_SELECTOR),
            total_span: dom::query(&container, TOTAL_SELECTOR),
            dots: dom::query_all(&container, DOT_SELECTOR),
            option_sets,
            cards,
            container,
        };
        (view, state)
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn is_active(&self) -> bool {
        self.container.class_list().contains("active")
    }

    pub fn set_active(&self, active: bool) {
        dom::toggle_class(&self.container, "active", active);
    }

    pub fn dot_index(&self, dot: &Element) -> Option<usize> {
        self.dots.iter().position(|d| d == dot)
    }

    /// `(selector, option)` position of a `.check-option` inside this group.
    pub fn option_position(&self, option: &Element) -> Option<(usize, usize)> {
        self.option_sets.iter().enumerate().find_map(|(set, options)| {
            options
                .iter()
                .position(|o| o == option)
                .map(|index| (set, index))
        })
    }

    /// Swap the two cards named by `transition` and refresh the controls.
    pub fn apply(&self, state: &CardGroupState, transition: Option<Transition>) {
        let Some(Transition { hide, show }) = transition else {
            return;
        };
        if let Some(card) = self.cards.get(hide) {
            dom::set_visible(card, false);
        }
        if let Some(card) = self.cards.get(show) {
            dom::set_visible(card, true);
        }
        self.render_controls(state);
    }

    /// Full redraw: cards, counter, total, buttons, dots and answers.
    pub fn render(&self, state: &CardGroupState) {
        let nav = state.nav_state();
        for (index, card) in self.cards.iter().enumerate() {
            dom::set_visible(card, nav.is_card_visible(index));
        }
        if let (Some(span), Some(total)) = (&self.total_span, &nav.total_text) {
            dom::set_text(span, total);
        }
        self.render_controls(state);
        self.render_choices(state);
    }

    pub fn render_choices(&self, state: &CardGroupState) {
        for (options, group) in self.option_sets.iter().zip(state.choices()) {
            choice::render(options, group);
        }
    }

    fn render_controls(&self, state: &CardGroupState) {
        let nav = state.nav_state();
        if let (Some(span), Some(counter)) = (&self.current_span, &nav.counter_text) {
            dom::set_text(span, counter);
        }
        if let Some(btn) = &self.prev_btn {
            dom::set_disabled(btn, nav.prev_disabled);
        }
        if let Some(btn) = &self.next_btn {
            dom::set_disabled(btn, nav.next_disabled);
        }
        for (index, dot) in self.dots.iter().enumerate() {
            dom::toggle_class(dot, "active", nav.is_dot_active(index));
        }
    }
}
