//! Command history with shell-style recall.
//!
//! A bounded list of submitted commands (oldest first), a recall cursor and a
//! draft slot that remembers what was typed before recall began.

use std::sync::Arc;

use crate::config::storage_keys;
use crate::ring_buffer::RingBuffer;
use crate::storage::{KeyValueStore, load_json, save_json};

/// Bounded command history with up/down navigation.
#[derive(Clone)]
pub struct CommandHistory {
    entries: RingBuffer<String>,
    /// `None` is the live edge; `Some(i)` points into `entries`.
    cursor: Option<usize>,
    draft: String,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl CommandHistory {
    /// In-memory history keeping at most `max_size` entries (at least one).
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: RingBuffer::new(max_size.max(1)),
            cursor: None,
            draft: String::new(),
            store: None,
        }
    }

    /// History hydrated from `store` and written back on every change.
    ///
    /// A missing or corrupt stored list starts empty. Only the most recent
    /// `max_size` stored entries are kept.
    pub fn persistent(max_size: usize, store: Arc<dyn KeyValueStore>) -> Self {
        let mut history = Self::new(max_size);
        let stored: Vec<String> =
            load_json(store.as_ref(), storage_keys::COMMAND_HISTORY).unwrap_or_default();
        history.entries.extend(stored);
        history.store = Some(store);
        history
    }

    /// Records a submitted command.
    ///
    /// Blank input and immediate repeats are not stored. Navigation is reset
    /// either way.
    pub fn add(&mut self, command: &str) {
        let trimmed = command.trim();
        if trimmed.is_empty() {
            return;
        }

        if self.entries.last().map(String::as_str) != Some(trimmed) {
            if let Some(evicted) = self.entries.push(trimmed.to_string()) {
                log::debug!("history full, evicted '{evicted}'");
            }
            self.persist();
        }
        self.reset_navigation();
    }

    /// Steps back in history and returns the recalled entry.
    ///
    /// Leaving the live edge saves `current_input` as the draft. Returns
    /// `current_input` unchanged when history is empty.
    pub fn navigate_previous(&mut self, current_input: &str) -> String {
        let Some(last) = self.entries.len().checked_sub(1) else {
            return current_input.to_string();
        };

        let index = match self.cursor {
            None => {
                self.draft = current_input.to_string();
                last
            }
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entry_at(index)
    }

    /// Steps forward in history.
    ///
    /// Moving past the newest entry returns to the live edge and yields the
    /// saved draft. No-op at the live edge.
    pub fn navigate_next(&mut self, current_input: &str) -> String {
        let Some(index) = self.cursor else {
            return current_input.to_string();
        };

        let next = index + 1;
        if next >= self.entries.len() {
            self.cursor = None;
            return std::mem::take(&mut self.draft);
        }
        self.cursor = Some(next);
        self.entry_at(next)
    }

    /// Returns to the live edge and drops the draft.
    pub fn reset_navigation(&mut self) {
        self.cursor = None;
        self.draft.clear();
    }

    /// Removes every entry (and the persisted copy).
    pub fn clear_history(&mut self) {
        self.entries.clear();
        self.reset_navigation();
        self.persist();
    }

    /// Current cursor position; `None` at the live edge.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.to_vec()
    }

    fn entry_at(&self, index: usize) -> String {
        self.entries.get(index).cloned().unwrap_or_default()
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            save_json(
                store.as_ref(),
                storage_keys::COMMAND_HISTORY,
                &self.entries.to_vec(),
            );
        }
    }
}

impl std::fmt::Debug for CommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandHistory")
            .field("entries", &self.entries)
            .field("cursor", &self.cursor)
            .field("draft", &self.draft)
            .field("persistent", &self.store.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn history_with(entries: &[&str]) -> CommandHistory {
        let mut history = CommandHistory::new(100);
        for entry in entries {
            history.add(entry);
        }
        history
    }

    #[test]
    fn test_add_trims_and_skips_blank() {
        let history = history_with(&["  help  ", "", "   "]);
        assert_eq!(history.entries(), vec!["help"]);
    }

    #[test]
    fn test_consecutive_duplicates_collapse() {
        let history = history_with(&["help", "help", " help", "clear", "help"]);
        assert_eq!(history.entries(), vec!["help", "clear", "help"]);
    }

    #[test]
    fn test_eviction_keeps_most_recent() {
        let mut history = CommandHistory::new(100);
        for i in 0..101 {
            history.add(&format!("cmd{i}"));
        }
        assert_eq!(history.len(), 100);
        assert_eq!(history.entries().first().map(String::as_str), Some("cmd1"));
        assert_eq!(history.entries().last().map(String::as_str), Some("cmd100"));
    }

    #[test]
    fn test_navigation_with_draft() {
        let mut history = history_with(&["a", "b", "c"]);

        assert_eq!(history.navigate_previous("draft"), "c");
        assert_eq!(history.navigate_previous("c"), "b");
        assert_eq!(history.navigate_next("b"), "c");
        assert_eq!(history.navigate_next("c"), "draft");
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_previous_clamps_at_oldest() {
        let mut history = history_with(&["a", "b"]);
        history.navigate_previous("");
        history.navigate_previous("");
        assert_eq!(history.navigate_previous(""), "a");
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn test_navigation_on_empty_history() {
        let mut history = CommandHistory::new(10);
        assert_eq!(history.navigate_previous("typing"), "typing");
        assert_eq!(history.navigate_next("typing"), "typing");
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_next_at_live_edge_is_noop() {
        let mut history = history_with(&["a"]);
        assert_eq!(history.navigate_next("partial"), "partial");
    }

    #[test]
    fn test_add_resets_navigation() {
        let mut history = history_with(&["a", "b"]);
        history.navigate_previous("draft");
        history.add("c");
        assert_eq!(history.cursor(), None);
        // draft was dropped by the submission
        assert_eq!(history.navigate_previous("new"), "c");
        assert_eq!(history.navigate_next("c"), "new");
    }

    #[test]
    fn test_clear_history() {
        let mut history = history_with(&["a", "b"]);
        history.navigate_previous("");
        history.clear_history();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = CommandHistory::new(0);
        history.add("a");
        history.add("b");
        assert_eq!(history.entries(), vec!["b"]);
    }

    #[test]
    fn test_persistence_round_trip() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut history = CommandHistory::persistent(100, store.clone());
        history.add("help");
        history.add("skills");

        let reloaded = CommandHistory::persistent(100, store);
        assert_eq!(reloaded.entries(), vec!["help", "skills"]);
    }

    #[test]
    fn test_hydrate_keeps_most_recent() {
        let store = Arc::new(MemoryStore::new());
        save_json(
            store.as_ref(),
            storage_keys::COMMAND_HISTORY,
            &["a", "b", "c", "d"],
        );
        let history = CommandHistory::persistent(2, store);
        assert_eq!(history.entries(), vec!["c", "d"]);
    }

    #[test]
    fn test_corrupt_stored_history_starts_empty() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(storage_keys::COMMAND_HISTORY, "{not a list")
            .unwrap();
        let history = CommandHistory::persistent(100, store);
        assert!(history.is_empty());
    }
}
