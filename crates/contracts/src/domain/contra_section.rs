//! Contraindication section: the tabs, the card group behind each tab and
//! the yes/no answers nested inside each group.
//!
//! The DOM binding only mirrors what these types decide; every state change
//! (moves, tab switches, resets, answer marking) happens here.

use super::binary_choice::{Choice, ChoiceGroup};
use super::card_browser::{CardBrowser, NavState, Transition};
use super::keyboard::NavCommand;
use super::tab_set::{TabSet, TabSwitch};

/// One `.contra-cards` group: its card browser plus the yes/no selectors
/// found inside it, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGroupState {
    id: String,
    browser: CardBrowser,
    choices: Vec<ChoiceGroup>,
}

impl CardGroupState {
    pub fn new(id: impl Into<String>, card_count: usize, choices: Vec<ChoiceGroup>) -> Self {
        Self {
            id: id.into(),
            browser: CardBrowser::initialize(card_count),
            choices,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn browser(&self) -> &CardBrowser {
        &self.browser
    }

    pub fn nav_state(&self) -> NavState {
        self.browser.nav_state()
    }

    pub fn choices(&self) -> &[ChoiceGroup] {
        &self.choices
    }

    pub fn show_next(&mut self) -> Option<Transition> {
        self.browser.show_next()
    }

    pub fn show_previous(&mut self) -> Option<Transition> {
        self.browser.show_previous()
    }

    /// Dot click: `index` is the dot's position among the group's dots.
    pub fn jump_to(&mut self, index: usize) -> Option<Transition> {
        self.browser.jump_to(index)
    }

    /// Keyboard move. Does nothing when the matching button is disabled.
    pub fn run(&mut self, command: NavCommand) -> Option<Transition> {
        match command {
            NavCommand::Next if self.browser.can_go_next() => self.browser.show_next(),
            NavCommand::Previous if self.browser.can_go_previous() => {
                self.browser.show_previous()
            }
            _ => None,
        }
    }

    /// Mark option `option` of selector `set`.
    pub fn select_choice(&mut self, set: usize, option: usize) -> Option<Choice> {
        self.choices.get_mut(set)?.select(option)
    }

    /// Back to the first card with every answer in the group cleared.
    pub fn reset_to_first(&mut self) {
        self.browser.reset_to_first();
        for choice in &mut self.choices {
            choice.clear();
        }
    }
}

/// All card groups of a fragment and the tabs switching between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContraSection {
    tabs: TabSet,
    groups: Vec<CardGroupState>,
    active: Option<usize>,
}

impl ContraSection {
    /// `marked_active` is the index of the group carrying `active` in markup.
    pub fn new(tabs: TabSet, groups: Vec<CardGroupState>, marked_active: Option<usize>) -> Self {
        let active = marked_active.filter(|i| *i < groups.len());
        Self {
            tabs,
            groups,
            active,
        }
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn groups(&self) -> &[CardGroupState] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&CardGroupState> {
        self.groups.get(index)
    }

    pub fn group_mut(&mut self, index: usize) -> Option<&mut CardGroupState> {
        self.groups.get_mut(index)
    }

    pub fn active_group(&self) -> Option<usize> {
        self.active
    }

    pub fn is_group_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Activate the tab targeting `group_id`. Its group becomes the only
    /// visible one and is rewound; the other groups keep their position and
    /// answers. Unknown ids change nothing.
    pub fn activate_tab(&mut self, group_id: &str) -> Option<TabSwitch> {
        let switch = self.tabs.activate(group_id)?;
        self.active = self.groups.iter().position(|g| g.id == group_id);
        if let Some(index) = self.active {
            self.groups[index].reset_to_first();
        }
        Some(switch)
    }

    /// Arrow key: moves the visible group only.
    pub fn run_on_active(&mut self, command: NavCommand) -> Option<(usize, Transition)> {
        let index = self.active?;
        let transition = self.groups[index].run(command)?;
        Some((index, transition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no() -> ChoiceGroup {
        ChoiceGroup::new(vec![Choice::Yes, Choice::No])
    }

    fn section() -> ContraSection {
        let tabs = TabSet::new(vec!["absolute".into(), "relative".into()], None);
        let groups = vec![
            CardGroupState::new("absolute", 3, vec![yes_no(), yes_no()]),
            CardGroupState::new("relative", 2, vec![yes_no()]),
        ];
        ContraSection::new(tabs, groups, Some(0))
    }

    #[test]
    fn test_reset_clears_answers() {
        let mut group = CardGroupState::new("absolute", 3, vec![yes_no(), yes_no()]);
        group.show_next();
        assert_eq!(group.select_choice(0, 0), Some(Choice::Yes));
        assert_eq!(group.select_choice(1, 1), Some(Choice::No));

        group.reset_to_first();
        assert_eq!(group.browser().active_index(), Some(0));
        assert!(group.choices().iter().all(|c| c.selected().is_none()));
        assert_eq!(group.nav_state().counter_text.as_deref(), Some("1"));
    }

    #[test]
    fn test_select_choice_out_of_range() {
        let mut group = CardGroupState::new("g", 1, vec![yes_no()]);
        assert_eq!(group.select_choice(3, 0), None);
        assert_eq!(group.select_choice(0, 9), None);
        assert_eq!(group.choices()[0].selected(), None);
    }

    #[test]
    fn test_keyboard_respects_disabled_buttons() {
        let mut group = CardGroupState::new("g", 2, vec![]);
        assert_eq!(group.run(NavCommand::Previous), None);
        assert_eq!(
            group.run(NavCommand::Next),
            Some(Transition { hide: 0, show: 1 })
        );
        assert!(group.nav_state().next_disabled);
        assert_eq!(group.run(NavCommand::Next), None);
        assert_eq!(group.browser().active_index(), Some(1));

        let mut empty = CardGroupState::new("e", 0, vec![]);
        assert_eq!(empty.run(NavCommand::Next), None);
        assert_eq!(empty.run(NavCommand::Previous), None);
    }

    #[test]
    fn test_dot_jump() {
        let mut group = CardGroupState::new("g", 3, vec![]);
        assert_eq!(group.jump_to(2), Some(Transition { hide: 0, show: 2 }));
        let state = group.nav_state();
        assert!(state.is_dot_active(2));
        assert!(!state.prev_disabled);
        assert!(state.next_disabled);
        assert_eq!(group.jump_to(7), None);
        assert_eq!(group.browser().active_index(), Some(2));
    }

    #[test]
    fn test_tab_switch_resets_only_target_group() {
        let mut section = section();
        {
            let absolute = section.group_mut(0).unwrap();
            absolute.show_next();
            absolute.select_choice(0, 1);
        }
        {
            let relative = section.group_mut(1).unwrap();
            relative.show_next();
            relative.select_choice(0, 0);
        }

        let switch = section.activate_tab("relative").unwrap();
        assert_eq!(switch.current, 1);
        assert!(section.is_group_active(1));
        assert!(!section.is_group_active(0));

        let relative = section.group(1).unwrap();
        assert_eq!(relative.browser().active_index(), Some(0));
        assert_eq!(relative.choices()[0].selected(), None);

        let absolute = section.group(0).unwrap();
        assert_eq!(absolute.browser().active_index(), Some(1));
        assert_eq!(absolute.choices()[0].selected(), Some((1, Choice::No)));
    }

    #[test]
    fn test_reclicking_active_tab_rewinds_it() {
        let mut section = section();
        section.group_mut(0).unwrap().jump_to(2);
        assert!(section.activate_tab("absolute").is_some());
        assert_eq!(section.group(0).unwrap().browser().active_index(), Some(0));
    }

    #[test]
    fn test_unknown_tab_changes_nothing() {
        let mut section = section();
        section.group_mut(0).unwrap().show_next();
        let before = section.clone();
        assert_eq!(section.activate_tab("missing"), None);
        assert_eq!(section, before);
    }

    #[test]
    fn test_keyboard_moves_active_group_only() {
        let mut section = section();
        assert_eq!(
            section.run_on_active(NavCommand::Next),
            Some((0, Transition { hide: 0, show: 1 }))
        );
        assert_eq!(section.group(1).unwrap().browser().active_index(), Some(0));

        let mut hidden =
            ContraSection::new(section.tabs().clone(), section.groups().to_vec(), None);
        assert_eq!(hidden.run_on_active(NavCommand::Next), None);
    }

    #[test]
    fn test_marked_active_out_of_range_is_dropped() {
        let tabs = TabSet::new(vec![], None);
        let section = ContraSection::new(tabs, vec![CardGroupState::new("g", 1, vec![])], Some(4));
        assert_eq!(section.active_group(), None);
    }
}
