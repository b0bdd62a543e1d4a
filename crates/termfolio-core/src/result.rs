//! Command execution result type.

use crate::output::Line;
use crate::preferences::{Switch, Theme};

/// Result of executing a command.
///
/// Commands produce display lines and may additionally request one
/// [`SpecialAction`] that the session controller interprets.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionResult {
    /// Lines to display
    pub content: Vec<Line>,
    /// Render with error styling
    pub is_error: bool,
    /// Side effect requested from the session, if any
    pub action: Option<SpecialAction>,
}

/// Side effects a command can request from the session controller.
///
/// Each variant carries exactly the payload it needs.
#[derive(Clone, Debug, PartialEq)]
pub enum SpecialAction {
    /// Reset the output log to empty.
    Clear,
    /// Switch the color theme.
    SetTheme(Theme),
    /// Enable or disable the typing animation.
    SetTypingAnimation(bool),
    /// Set the typing animation speed (characters per second).
    SetTypingSpeed(u32),
    /// Turn the Matrix background on, off, or flip it.
    SetMatrix(Switch),
    /// Turn audio effects on, off, or flip them.
    SetAudio(Switch),
    /// Ask the display to open a URL in a new tab.
    OpenUrl(String),
    /// Work that completes later; the output entry is a placeholder until then.
    Defer(DeferredTask),
}

/// Asynchronous work the display performs on behalf of a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    /// Fetch current weather for a city.
    Weather { city: String },
    /// Run an interactive Snake round until the player leaves.
    Snake,
}

impl ExecutionResult {
    /// A plain successful result.
    pub fn output(content: Vec<Line>) -> Self {
        Self {
            content,
            is_error: false,
            action: None,
        }
    }

    /// An error-styled result.
    pub fn error(content: Vec<Line>) -> Self {
        Self {
            content,
            is_error: true,
            action: None,
        }
    }

    /// A single plain text line.
    pub fn text(s: impl Into<String>) -> Self {
        Self::output(vec![Line::text(s)])
    }

    /// Attach a special action to this result.
    pub fn with_action(mut self, action: SpecialAction) -> Self {
        self.action = Some(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let ok = ExecutionResult::text("done");
        assert!(!ok.is_error);
        assert_eq!(ok.content, vec![Line::text("done")]);
        assert_eq!(ok.action, None);

        let err = ExecutionResult::error(vec![Line::error("nope")]);
        assert!(err.is_error);
    }

    #[test]
    fn test_with_action() {
        let result = ExecutionResult::output(vec![]).with_action(SpecialAction::Clear);
        assert_eq!(result.action, Some(SpecialAction::Clear));
    }
}
