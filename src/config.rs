//! Front-end configuration.
//!
//! Terminal behaviour and profile data live in `termfolio_core::config`;
//! this module only holds what the browser layer needs.

use termfolio_core::config::profile;

// =============================================================================
// Terminal Display
// =============================================================================

/// User shown in the prompt.
pub const PROMPT_USER: &str = "user";

/// Prompt string shown before every input line.
pub fn prompt() -> String {
    format!("{}@{}:~", PROMPT_USER, profile::HANDLE)
}

/// Element id the app is mounted into.
pub const ROOT_ELEMENT_ID: &str = "app";

/// CSS selector of the command input, used to restore focus.
pub const INPUT_SELECTOR: &str = "input[data-terminal-input]";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;
