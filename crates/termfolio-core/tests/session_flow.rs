//! End-to-end session behaviour against the built-in command table.

use std::sync::Arc;

use termfolio_core::config::storage_keys;
use termfolio_core::{
    Command, CommandRegistry, ExecutionResult, Followup, KeyValueStore, Line, LogEntryData,
    MemoryStore, SessionConfig, SpecialAction, StorageError, TerminalSession, Theme,
    builtin_registry, execute_command,
};

fn new_session(store: Arc<dyn KeyValueStore>) -> TerminalSession {
    let registry = Arc::new(builtin_registry(store.clone()).expect("builtin table is consistent"));
    TerminalSession::new(registry, store, SessionConfig::default())
}

fn output_lines(session: &TerminalSession, index: usize) -> (Vec<Line>, bool) {
    match &session.entries()[index].data {
        LogEntryData::Output { lines, is_error } => (lines.clone(), *is_error),
        other => panic!("expected output at {index}, got {other:?}"),
    }
}

/// Store whose every operation fails.
struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read {
            key: key.to_string(),
            reason: "disk on fire".to_string(),
        })
    }
    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }
    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn unknown_command_without_close_match() {
    let mut registry = CommandRegistry::new();
    builtin_help_only(&mut registry);

    let result = execute_command(&registry, "nonexistentcmd");
    assert!(result.is_error);
    assert_eq!(
        result.content,
        vec![
            Line::error("Error: Command 'nonexistentcmd' not found."),
            Line::text("Type 'help' to see available commands."),
        ]
    );
}

fn builtin_help_only(registry: &mut CommandRegistry) {
    struct Help;
    impl Command for Help {
        fn name(&self) -> &str {
            "help"
        }
        fn description(&self) -> &str {
            "Lists all available commands."
        }
        fn execute(&self, _args: &[String]) -> ExecutionResult {
            ExecutionResult::text("help")
        }
    }
    registry.register(Box::new(Help), &[]).unwrap();
}

#[test]
fn unknown_command_in_session_suggests_close_names() {
    let mut session = new_session(Arc::new(MemoryStore::new()));
    session.handle_command("skils");

    let (lines, is_error) = output_lines(&session, 3);
    assert!(is_error);
    assert_eq!(lines[1], Line::info("Did you mean: skills?"));
}

#[test]
fn clear_leaves_an_empty_log() {
    let mut session = new_session(Arc::new(MemoryStore::new()));
    session.handle_command("help");
    session.handle_command("summary");
    session.handle_command("CLS");
    assert!(session.entries().is_empty());

    session.handle_command("whoami");
    assert_eq!(session.entries().len(), 2);
}

#[test]
fn theme_change_is_applied_recorded_and_persisted() {
    let store = Arc::new(MemoryStore::new());
    let mut session = new_session(store.clone());

    let registry = builtin_registry(store.clone()).unwrap();
    assert_eq!(
        execute_command(&registry, "theme hacker").action,
        Some(SpecialAction::SetTheme(Theme::Hacker))
    );

    session.handle_command("theme hacker");
    assert_eq!(session.preferences().theme(), Theme::Hacker);
    assert_eq!(session.entries().len(), 4);
    assert_eq!(
        session.entries()[2].data,
        LogEntryData::Input("theme hacker".to_string())
    );
    assert_eq!(store.raw(storage_keys::THEME).as_deref(), Some(r#""hacker""#));

    // a fresh session picks the theme back up
    let reloaded = new_session(store);
    assert_eq!(reloaded.preferences().theme(), Theme::Hacker);
}

#[test]
fn invalid_theme_is_an_error_without_side_effects() {
    let mut session = new_session(Arc::new(MemoryStore::new()));
    session.handle_command("theme neon");
    let (_, is_error) = output_lines(&session, 3);
    assert!(is_error);
    assert_eq!(session.preferences().theme(), Theme::Dark);
}

#[test]
fn typing_preferences() {
    let mut session = new_session(Arc::new(MemoryStore::new()));
    session.handle_command("typing on");
    session.handle_command("typing speed 42");
    assert!(session.preferences().typing_animation());
    assert_eq!(session.preferences().typing_speed(), 42);

    session.handle_command("typing speed 9000");
    assert_eq!(session.preferences().typing_speed(), 42);
}

#[test]
fn history_persists_and_dedupes() {
    let store = Arc::new(MemoryStore::new());
    let mut session = new_session(store.clone());
    session.handle_command("help");
    session.handle_command("help");
    session.handle_command("skills");
    assert_eq!(session.history().entries(), vec!["help", "skills"]);

    let mut reloaded = new_session(store);
    assert_eq!(reloaded.navigate_previous(""), "skills");
    assert_eq!(reloaded.navigate_previous(""), "help");
}

#[test]
fn history_caps_at_configured_size() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let registry = Arc::new(builtin_registry(store.clone()).unwrap());
    let config = SessionConfig {
        history_size: 3,
        persist_history: false,
        ..SessionConfig::default()
    };
    let mut session = TerminalSession::new(registry, store, config);
    for cmd in ["a", "b", "c", "d"] {
        session.handle_command(cmd);
    }
    assert_eq!(session.history().entries(), vec!["b", "c", "d"]);
}

#[test]
fn failing_store_degrades_to_defaults() {
    let mut session = new_session(Arc::new(FailingStore));
    assert_eq!(session.preferences().theme(), Theme::Dark);

    // in-memory state still changes when writes fail
    session.handle_command("theme light");
    session.handle_command("coffee espresso");
    assert_eq!(session.preferences().theme(), Theme::Light);
    assert_eq!(session.history().entries(), vec!["theme light", "coffee espresso"]);

    let (_, is_error) = output_lines(&session, 5);
    assert!(!is_error);
}

#[test]
fn tab_completion_flow() {
    let mut session = new_session(Arc::new(MemoryStore::new()));

    let single = session.handle_tab("neo");
    assert!(single.should_update_input);
    assert_eq!(single.completed, "neofetch");

    let first = session.handle_tab("s");
    assert!(first.should_open);
    assert_eq!(session.suggestions("s"), vec!["skills", "summary"]);
    let second = session.handle_tab("s");
    assert!(!second.should_open);
    assert!(!session.suggestions_open());
}

#[test]
fn weather_followup_round_trip() {
    let mut session = new_session(Arc::new(MemoryStore::new()));
    let followup = session.handle_command("weather  Ho Chi Minh");
    let Some(Followup::Deferred { entry_id, .. }) = followup else {
        panic!("expected a deferred followup, got {followup:?}");
    };

    let failure = termfolio_core::weather::failure_lines("Failed to fetch weather data");
    assert!(session.resolve_deferred(entry_id, failure.clone(), true));
    assert_eq!(output_lines(&session, 3), (failure, true));
}

#[test]
fn coffee_stats_accumulate() {
    let mut session = new_session(Arc::new(MemoryStore::new()));
    session.handle_command("coffee latte");
    session.handle_command("coffee mocha");
    session.handle_command("coffee stats");

    let (lines, _) = output_lines(&session, 7);
    assert!(lines.contains(&Line::field("Total Brews", "2")));
    assert!(lines.contains(&Line::field("Current Caffeine", "165mg")));
}
