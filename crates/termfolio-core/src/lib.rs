//! Termfolio Core - terminal logic for the termfolio portfolio site.
//!
//! This crate contains everything that does not touch the browser:
//!
//! - [`registry`]: the [`Command`] trait and case-insensitive [`CommandRegistry`]
//! - [`executor`]: line parsing, dispatch and "did you mean" suggestions
//! - [`autocomplete`]: Tab completion over command names
//! - [`history`]: bounded command history with up/down recall
//! - [`session`]: the [`TerminalSession`] controller owning the output log
//! - [`commands`]: the built-in command table
//! - [`storage`] / [`preferences`]: best-effort persisted state
//! - [`snake`]: the rules of the `snake` mini-game
//!
//! Rendering, DOM access and network fetches live in the front-end crate.

pub mod autocomplete;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod history;
pub mod output;
pub mod preferences;
pub mod registry;
pub mod result;
pub mod ring_buffer;
pub mod session;
pub mod similarity;
pub mod snake;
pub mod storage;
pub mod weather;

pub use autocomplete::{Autocomplete, TabOutcome};
pub use commands::builtin_registry;
pub use error::{RegistryError, StorageError, WeatherError};
pub use executor::{ParsedCommand, execute_command, parse_command_line, suggest_commands};
pub use history::CommandHistory;
pub use output::{Line, LogEntry, LogEntryData};
pub use preferences::{Preferences, Switch, Theme};
pub use registry::{Command, CommandRegistry};
pub use result::{DeferredTask, ExecutionResult, SpecialAction};
pub use ring_buffer::RingBuffer;
pub use session::{Followup, SessionConfig, TerminalSession};
pub use similarity::{calculate_similarity, find_similar_strings, levenshtein_distance};
pub use snake::{Direction, GameStatus, KeyResponse, Position, SnakeGame};
pub use storage::{KeyValueStore, MemoryStore, load_json, load_json_or, save_json};
pub use weather::WeatherReport;
