/// Value carried by a `.check-option` via its `data-value` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

/// Every class a selector may carry; cleared before marking a new option.
pub const ALL_SELECTION_CLASSES: [&str; 2] = ["selected-yes", "selected-no"];

impl Choice {
    /// Anything other than `"yes"` counts as "no".
    pub fn from_data_value(value: Option<&str>) -> Self {
        match value {
            Some("yes") => Choice::Yes,
            _ => Choice::No,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Choice::Yes => "selected-yes",
            Choice::No => "selected-no",
        }
    }
}

/// Options sharing one parent element. At most one is marked at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroup {
    options: Vec<Choice>,
    selected: Option<usize>,
}

impl ChoiceGroup {
    pub fn new(options: Vec<Choice>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<(usize, Choice)> {
        self.selected.map(|i| (i, self.options[i]))
    }

    /// Class the option at `index` should carry, if any.
    pub fn class_for(&self, index: usize) -> Option<&'static str> {
        match self.selected {
            Some(i) if i == index => Some(self.options[i].css_class()),
            _ => None,
        }
    }

    /// Mark the clicked option and unmark its siblings. Out-of-range clicks
    /// leave the group untouched.
    pub fn select(&mut self, index: usize) -> Option<Choice> {
        let choice = *self.options.get(index)?;
        self.selected = Some(index);
        Some(choice)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_value_parsing() {
        assert_eq!(Choice::from_data_value(Some("yes")), Choice::Yes);
        assert_eq!(Choice::from_data_value(Some("no")), Choice::No);
        assert_eq!(Choice::from_data_value(Some("YES")), Choice::No);
        assert_eq!(Choice::from_data_value(None), Choice::No);
    }

    #[test]
    fn test_last_click_wins() {
        let mut group = ChoiceGroup::new(vec![Choice::Yes, Choice::No]);
        assert_eq!(group.selected(), None);

        assert_eq!(group.select(0), Some(Choice::Yes));
        assert_eq!(group.class_for(0), Some("selected-yes"));
        assert_eq!(group.class_for(1), None);

        assert_eq!(group.select(1), Some(Choice::No));
        assert_eq!(group.class_for(0), None);
        assert_eq!(group.class_for(1), Some("selected-no"));

        let marked = (0..2).filter(|i| group.class_for(*i).is_some()).count();
        assert_eq!(marked, 1);
    }

    #[test]
    fn test_out_of_range_and_clear() {
        let mut group = ChoiceGroup::new(vec![Choice::Yes, Choice::No]);
        group.select(0);
        assert_eq!(group.select(5), None);
        assert_eq!(group.selected(), Some((0, Choice::Yes)));

        group.clear();
        assert_eq!(group.selected(), None);
        assert!(ALL_SELECTION_CLASSES.contains(&Choice::Yes.css_class()));
        assert!(ALL_SELECTION_CLASSES.contains(&Choice::No.css_class()));
    }
}
