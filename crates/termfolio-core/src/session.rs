//! Terminal session controller.
//!
//! Owns the output log and wires the executor, history, autocomplete and
//! preferences together. The display holds one [`TerminalSession`] and feeds
//! it submitted lines and key presses.

use std::sync::Arc;

use crate::autocomplete::{Autocomplete, TabOutcome};
use crate::config::{MAX_COMMAND_HISTORY, MIN_SUGGESTION_CHARS, WELCOME_COMMAND};
use crate::executor::execute_command;
use crate::history::CommandHistory;
use crate::output::{Line, LogEntry};
use crate::preferences::Preferences;
use crate::registry::CommandRegistry;
use crate::result::{DeferredTask, ExecutionResult, SpecialAction};
use crate::storage::KeyValueStore;

/// Session tuning knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum number of history entries kept.
    pub history_size: usize,
    /// Load and save history through the store.
    pub persist_history: bool,
    /// Minimum trimmed input length before autocomplete suggests anything.
    pub min_suggestion_chars: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_size: MAX_COMMAND_HISTORY,
            persist_history: true,
            min_suggestion_chars: MIN_SUGGESTION_CHARS,
        }
    }
}

/// Work the display must carry out after a command was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Followup {
    /// Open the URL in a new tab.
    OpenUrl(String),
    /// Run `task`, then call [`TerminalSession::resolve_deferred`] with
    /// `entry_id` to replace the placeholder output.
    Deferred { entry_id: usize, task: DeferredTask },
}

/// One terminal session: output log, history, autocomplete and preferences.
pub struct TerminalSession {
    registry: Arc<CommandRegistry>,
    log: Vec<LogEntry>,
    history: CommandHistory,
    autocomplete: Autocomplete,
    preferences: Preferences,
}

impl TerminalSession {
    /// Starts a session whose log holds the `welcome` command and its output.
    pub fn new(
        registry: Arc<CommandRegistry>,
        store: Arc<dyn KeyValueStore>,
        config: SessionConfig,
    ) -> Self {
        let history = if config.persist_history {
            CommandHistory::persistent(config.history_size, store.clone())
        } else {
            CommandHistory::new(config.history_size)
        };
        let autocomplete = Autocomplete::new(registry.names(), config.min_suggestion_chars);

        let welcome = execute_command(&registry, WELCOME_COMMAND);
        let log = vec![
            LogEntry::input(WELCOME_COMMAND),
            LogEntry::output(welcome.content, welcome.is_error),
        ];

        Self {
            registry,
            log,
            history,
            autocomplete,
            preferences: Preferences::load(store),
        }
    }

    /// Output log, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.log
    }

    /// Handles one submitted line.
    ///
    /// Every line goes to history first. Blank lines only echo an input
    /// record. `clear` empties the log without recording itself; any other
    /// command appends its input and output records, after its special action
    /// (if any) has been applied.
    pub fn handle_command(&mut self, raw: &str) -> Option<Followup> {
        self.history.add(raw);
        self.autocomplete.close();

        if raw.trim().is_empty() {
            self.log.push(LogEntry::input(raw));
            return None;
        }

        let ExecutionResult {
            mut content,
            is_error,
            action,
        } = execute_command(&self.registry, raw);

        let mut followup = None;
        let mut deferred = None;
        match action {
            None => {}
            Some(SpecialAction::Clear) => {
                log::debug!("clearing {} log entries", self.log.len());
                self.log.clear();
                return None;
            }
            Some(SpecialAction::SetTheme(theme)) => self.preferences.set_theme(theme),
            Some(SpecialAction::SetTypingAnimation(enabled)) => {
                self.preferences.set_typing_animation(enabled)
            }
            Some(SpecialAction::SetTypingSpeed(speed)) => self.preferences.set_typing_speed(speed),
            Some(SpecialAction::SetMatrix(switch)) => {
                let enabled = self.preferences.set_matrix(switch);
                content.extend(matrix_status(enabled));
            }
            Some(SpecialAction::SetAudio(switch)) => {
                let enabled = self.preferences.set_audio(switch);
                content.extend(audio_status(enabled));
            }
            Some(SpecialAction::OpenUrl(url)) => followup = Some(Followup::OpenUrl(url)),
            Some(SpecialAction::Defer(task)) => deferred = Some(task),
        }

        self.log.push(LogEntry::input(raw));
        let output = LogEntry::output(content, is_error);
        let entry_id = output.id;
        self.log.push(output);

        match deferred {
            Some(task) => Some(Followup::Deferred { entry_id, task }),
            None => followup,
        }
    }

    /// Replaces the output of a deferred command.
    ///
    /// The replacement takes the placeholder's position but gets a fresh ID,
    /// so keyed views redraw it and a second resolution is refused.
    /// Returns `false` (and leaves the log untouched) if the entry is gone,
    /// e.g. because the log was cleared in the meantime.
    pub fn resolve_deferred(&mut self, entry_id: usize, lines: Vec<Line>, is_error: bool) -> bool {
        let entry = self
            .log
            .iter_mut()
            .find(|entry| entry.id == entry_id && !entry.is_input());
        match entry {
            Some(entry) => {
                *entry = LogEntry::output(lines, is_error);
                true
            }
            None => {
                log::warn!("deferred output {entry_id} no longer in the log");
                false
            }
        }
    }

    pub fn navigate_previous(&mut self, current_input: &str) -> String {
        self.history.navigate_previous(current_input)
    }

    pub fn navigate_next(&mut self, current_input: &str) -> String {
        self.history.navigate_next(current_input)
    }

    /// Registered command names, aliases excluded.
    pub fn command_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Prefix matches for `input`, shortest first.
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        self.autocomplete.suggestions(input)
    }

    pub fn handle_tab(&mut self, input: &str) -> TabOutcome {
        self.autocomplete.handle_tab(input)
    }

    pub fn suggestions_open(&self) -> bool {
        self.autocomplete.is_open()
    }

    pub fn open_suggestions(&mut self) {
        self.autocomplete.open();
    }

    pub fn close_suggestions(&mut self) {
        self.autocomplete.close();
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}

fn matrix_status(enabled: bool) -> [Line; 3] {
    if enabled {
        [
            Line::success("Matrix background has been enabled."),
            Line::text("Digital rain is now falling in the background..."),
            Line::info("Type 'matrix' again to toggle."),
        ]
    } else {
        [
            Line::success("Matrix background has been disabled."),
            Line::text("The Matrix has been paused."),
            Line::info("Type 'matrix' again to toggle."),
        ]
    }
}

fn audio_status(enabled: bool) -> [Line; 3] {
    if enabled {
        [
            Line::success("Audio has been enabled."),
            Line::text("Typing sounds are now active. Try typing!"),
            Line::info("Type 'audio' again to toggle."),
        ]
    } else {
        [
            Line::success("Audio has been disabled."),
            Line::text("All sounds have been muted."),
            Line::info("Type 'audio' again to toggle."),
        ]
    }
}

impl std::fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSession")
            .field("log_len", &self.log.len())
            .field("history", &self.history)
            .field("preferences", &self.preferences)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin_registry;
    use crate::output::LogEntryData;
    use crate::preferences::Theme;
    use crate::storage::MemoryStore;

    fn session() -> TerminalSession {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let registry = Arc::new(builtin_registry(store.clone()).unwrap());
        TerminalSession::new(registry, store, SessionConfig::default())
    }

    #[test]
    fn test_starts_with_welcome() {
        let session = session();
        let entries = session.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].data, LogEntryData::Input("welcome".to_string()));
        assert!(!entries[1].is_input());
        assert!(!entries[1].is_error());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_command_appends_pair() {
        let mut session = session();
        assert_eq!(session.handle_command("skills"), None);
        let entries = session.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[2].data, LogEntryData::Input("skills".to_string()));
        assert!(!entries[3].is_input());
        assert_ne!(entries[2].id, entries[3].id);
    }

    #[test]
    fn test_blank_line_echoes_input_only() {
        let mut session = session();
        session.handle_command("   ");
        assert_eq!(session.entries().len(), 3);
        assert!(session.entries()[2].is_input());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_clear_empties_log() {
        let mut session = session();
        session.handle_command("help");
        assert_eq!(session.handle_command("clear"), None);
        assert!(session.entries().is_empty());
        assert_eq!(session.history().entries(), vec!["help", "clear"]);
    }

    #[test]
    fn test_theme_applied_and_recorded() {
        let mut session = session();
        session.handle_command("theme hacker");
        assert_eq!(session.preferences().theme(), Theme::Hacker);
        assert_eq!(session.entries().len(), 4);
    }

    #[test]
    fn test_matrix_toggle_reports_state() {
        let mut session = session();
        session.handle_command("matrix");
        assert!(session.preferences().matrix_enabled());
        let LogEntryData::Output { lines, .. } = &session.entries()[3].data else {
            panic!("expected output entry");
        };
        assert_eq!(lines[0], Line::success("Matrix background has been enabled."));

        session.handle_command("matrix");
        assert!(!session.preferences().matrix_enabled());
    }

    #[test]
    fn test_open_url_followup() {
        let mut session = session();
        assert_eq!(
            session.handle_command("resume"),
            Some(Followup::OpenUrl("/resume.pdf".to_string()))
        );
    }

    #[test]
    fn test_deferred_resolution() {
        let mut session = session();
        let Some(Followup::Deferred { entry_id, task }) = session.handle_command("weather Tokyo")
        else {
            panic!("expected deferred followup");
        };
        assert_eq!(
            task,
            DeferredTask::Weather {
                city: "Tokyo".to_string()
            }
        );
        assert_eq!(session.entries()[3].id, entry_id);

        assert!(session.resolve_deferred(entry_id, vec![Line::text("sunny")], false));
        assert_eq!(
            session.entries()[3].data,
            LogEntryData::Output {
                lines: vec![Line::text("sunny")],
                is_error: false,
            }
        );
        assert_ne!(session.entries()[3].id, entry_id);
        assert!(!session.resolve_deferred(entry_id, vec![Line::text("again")], false));
        assert_eq!(session.entries().len(), 4);
    }

    #[test]
    fn test_deferred_after_clear_is_dropped() {
        let mut session = session();
        let Some(Followup::Deferred { entry_id, .. }) = session.handle_command("weather Paris")
        else {
            panic!("expected deferred followup");
        };
        session.handle_command("clear");
        assert!(!session.resolve_deferred(entry_id, vec![Line::text("late")], false));
        assert!(session.entries().is_empty());
    }

    #[test]
    fn test_resolve_rejects_input_entries() {
        let mut session = session();
        let input_id = session.entries()[0].id;
        assert!(!session.resolve_deferred(input_id, Vec::new(), true));
    }

    #[test]
    fn test_submission_closes_suggestions() {
        let mut session = session();
        let outcome = session.handle_tab("s");
        assert!(outcome.should_open);
        assert!(session.suggestions_open());
        session.handle_command("summary");
        assert!(!session.suggestions_open());
    }

    #[test]
    fn test_history_navigation() {
        let mut session = session();
        session.handle_command("help");
        session.handle_command("skills");
        assert_eq!(session.navigate_previous("dra"), "skills");
        assert_eq!(session.navigate_previous("skills"), "help");
        assert_eq!(session.navigate_next("help"), "skills");
        assert_eq!(session.navigate_next("skills"), "dra");
    }
}
