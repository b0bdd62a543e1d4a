//! Tab autocomplete for command names.
//!
//! Terminal-style behaviour:
//! - Single match: complete immediately
//! - Multiple matches: first Tab opens the suggestion list, the next closes it
//!
//! The engine only tracks whether the list is open. Keeping the displayed list
//! stable while it is open is the caller's job (see the input component).

/// Outcome of a Tab press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabOutcome {
    /// The completed input, or the unchanged input when nothing completed.
    pub completed: String,
    /// The suggestion list was just opened.
    pub should_open: bool,
    /// The caller should replace its input with `completed`.
    pub should_update_input: bool,
}

impl TabOutcome {
    fn unchanged(input: &str, should_open: bool) -> Self {
        Self {
            completed: input.to_string(),
            should_open,
            should_update_input: false,
        }
    }
}

/// Prefix-matching autocomplete over a fixed list of command names.
#[derive(Clone, Debug)]
pub struct Autocomplete {
    names: Vec<String>,
    min_chars: usize,
    is_open: bool,
}

impl Autocomplete {
    /// Creates an engine over `names` that stays silent until the trimmed
    /// input is at least `min_chars` long.
    pub fn new(names: Vec<String>, min_chars: usize) -> Self {
        Self {
            names,
            min_chars,
            is_open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Names starting with the trimmed, lower-cased input, shortest first.
    ///
    /// Names of equal length keep their original relative order.
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        let needle = input.trim().to_lowercase();
        if needle.chars().count() < self.min_chars {
            return Vec::new();
        }

        let mut matches: Vec<String> = self
            .names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&needle))
            .cloned()
            .collect();
        matches.sort_by_key(|name| name.chars().count());
        matches
    }

    /// Handles a Tab press on `input`, updating the open state.
    pub fn handle_tab(&mut self, input: &str) -> TabOutcome {
        let mut matches = self.suggestions(input);
        match matches.len() {
            0 => TabOutcome::unchanged(input, false),
            1 => {
                self.is_open = false;
                TabOutcome {
                    completed: matches.remove(0),
                    should_open: false,
                    should_update_input: true,
                }
            }
            _ if self.is_open => {
                self.is_open = false;
                TabOutcome::unchanged(input, false)
            }
            _ => {
                self.is_open = true;
                TabOutcome::unchanged(input, true)
            }
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Same as [`close`](Self::close).
    pub fn reset(&mut self) {
        self.close();
    }
}
