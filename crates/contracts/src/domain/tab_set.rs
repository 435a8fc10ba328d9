/// Result of activating a tab. `previous == current` when the active tab was
/// clicked again; callers still reset its card group in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSwitch {
    pub previous: usize,
    pub current: usize,
}

/// Sibling tabs, each pointing at one card group by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    group_ids: Vec<String>,
    active: Option<usize>,
}

impl TabSet {
    /// Build from tab targets in document order. `initially_active` is the
    /// group id marked active in markup; the first tab wins if it is missing
    /// or unknown.
    pub fn new(group_ids: Vec<String>, initially_active: Option<&str>) -> Self {
        let active = initially_active
            .and_then(|id| group_ids.iter().position(|g| g == id))
            .or(if group_ids.is_empty() { None } else { Some(0) });
        Self { group_ids, active }
    }

    pub fn len(&self) -> usize {
        self.group_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group_ids.is_empty()
    }

    pub fn group_ids(&self) -> &[String] {
        &self.group_ids
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_group(&self) -> Option<&str> {
        self.active.map(|i| self.group_ids[i].as_str())
    }

    pub fn is_active(&self, group_id: &str) -> bool {
        self.active_group() == Some(group_id)
    }

    /// Activate the tab targeting `group_id`. Unknown ids are ignored.
    pub fn activate(&mut self, group_id: &str) -> Option<TabSwitch> {
        let current = self.group_ids.iter().position(|g| g == group_id)?;
        let previous = self.active.unwrap_or(current);
        self.active = Some(current);
        Some(TabSwitch { previous, current })
    }
}
