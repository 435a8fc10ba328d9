//! Card browser: one visible card at a time out of an ordered group.
//!
//! States are the indices `0..len`. Moves are `next` (guarded by
//! `active < len - 1`), `previous` (guarded by `active > 0`), `jump(i)` and
//! `reset`. Guards that fail are silent no-ops, not errors.

/// Visibility change produced by a move: hide one card, show another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub hide: usize,
    pub show: usize,
}

/// Snapshot of everything the navigation controls display.
///
/// `counter_text` and `total_text` are `None` for an empty group: nothing is
/// rendered then and both buttons stay disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub visible: Option<usize>,
    pub counter_text: Option<String>,
    pub total_text: Option<String>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl NavState {
    /// Jump dots mirror the visible card.
    pub fn is_dot_active(&self, index: usize) -> bool {
        self.visible == Some(index)
    }

    pub fn is_card_visible(&self, index: usize) -> bool {
        self.visible == Some(index)
    }
}

/// State of a single card group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBrowser {
    len: usize,
    active: Option<usize>,
}

impl CardBrowser {
    /// Start at the first card. An empty group has no active card.
    pub fn initialize(len: usize) -> Self {
        Self {
            len,
            active: if len == 0 { None } else { Some(0) },
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn can_go_previous(&self) -> bool {
        matches!(self.active, Some(i) if i > 0)
    }

    pub fn can_go_next(&self) -> bool {
        matches!(self.active, Some(i) if i + 1 < self.len)
    }

    /// Advance by one card. `None` at the last card.
    pub fn show_next(&mut self) -> Option<Transition> {
        if !self.can_go_next() {
            return None;
        }
        let current = self.active?;
        self.move_to(current + 1)
    }

    /// Step back by one card. `None` at the first card.
    pub fn show_previous(&mut self) -> Option<Transition> {
        if !self.can_go_previous() {
            return None;
        }
        let current = self.active?;
        self.move_to(current - 1)
    }

    /// Jump straight to `index`.
    ///
    /// Out-of-range indices are ignored, not clamped. Jumping to the current
    /// card is also a no-op.
    pub fn jump_to(&mut self, index: usize) -> Option<Transition> {
        if index >= self.len {
            return None;
        }
        self.move_to(index)
    }

    /// Back to the first card from any state. Same observable result as
    /// [`CardBrowser::initialize`] with the current length.
    pub fn reset_to_first(&mut self) {
        *self = Self::initialize(self.len);
    }

    pub fn nav_state(&self) -> NavState {
        match self.active {
            Some(active) => NavState {
                visible: Some(active),
                counter_text: Some((active + 1).to_string()),
                total_text: Some(self.len.to_string()),
                prev_disabled: active == 0,
                next_disabled: active + 1 >= self.len,
            },
            None => NavState {
                visible: None,
                counter_text: None,
                total_text: None,
                prev_disabled: true,
                next_disabled: true,
            },
        }
    }

    fn move_to(&mut self, index: usize) -> Option<Transition> {
        let current = self.active?;
        if current == index {
            return None;
        }
        self.active = Some(index);
        Some(Transition {
            hide: current,
            show: index,
        })
    }
}
