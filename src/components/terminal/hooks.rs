//! Custom hooks for terminal components.

use leptos::prelude::*;
use termfolio_core::TabOutcome;

/// What a Tab press does to the visible suggestion list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListChange {
    /// Freeze these items as the visible list.
    Show(Vec<String>),
    Hide,
    Keep,
}

/// Maps a Tab outcome to a list change.
///
/// `engine_open` is the engine's open state after the press. A press with no
/// matches leaves the engine open, so the frozen list stays up with it.
pub fn list_change(outcome: &TabOutcome, engine_open: bool, items: Vec<String>) -> ListChange {
    if outcome.should_update_input {
        ListChange::Hide
    } else if outcome.should_open {
        ListChange::Show(items)
    } else if engine_open {
        ListChange::Keep
    } else {
        ListChange::Hide
    }
}

/// The suggestion list shown under the input.
///
/// The list is captured when it opens and stays frozen while the user keeps
/// typing, so entries don't jump around under the cursor. It is dropped when
/// the list closes.
#[derive(Clone, Copy)]
pub struct SuggestionState {
    /// Suggestions captured when the list opened.
    pub items: RwSignal<Vec<String>>,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.items.with_untracked(|items| !items.is_empty())
    }

    /// Freezes `items` as the visible list.
    pub fn show(&self, items: Vec<String>) {
        self.items.set(items);
    }

    pub fn hide(&self) {
        if self.is_visible() {
            self.items.set(Vec::new());
        }
    }

    pub fn apply(&self, change: ListChange) {
        match change {
            ListChange::Show(items) => self.show(items),
            ListChange::Hide => self.hide(),
            ListChange::Keep => {}
        }
    }
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self::new()
    }
}
