//! Session control commands: theme, typing, matrix, audio, clear.
//!
//! These only describe the change; the session applies the returned
//! [`SpecialAction`].

use crate::config::TYPING_SPEED_RANGE;
use crate::error::RegistryError;
use crate::output::Line;
use crate::preferences::{Switch, Theme};
use crate::registry::{Command, CommandRegistry};
use crate::result::{ExecutionResult, SpecialAction};

fn theme_names() -> String {
    Theme::ALL.map(Theme::as_str).join(", ")
}

// ---------------------------------------------------------------------------
// theme
// ---------------------------------------------------------------------------

struct ThemeCmd;
impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }
    fn description(&self) -> &str {
        "Change the terminal theme. Usage: theme <dark|light|hacker>"
    }
    fn execute(&self, args: &[String]) -> ExecutionResult {
        let Some(requested) = args.first() else {
            let mut lines = vec![Line::text("Current available themes:")];
            lines.extend(Theme::ALL.map(|theme| Line::info(format!("  • {theme}"))));
            lines.push(Line::Empty);
            lines.push(Line::text("Usage: theme <theme_name>"));
            return ExecutionResult::output(lines);
        };

        match requested.parse::<Theme>() {
            Ok(theme) => ExecutionResult::text(format!("Setting theme to '{theme}'..."))
                .with_action(SpecialAction::SetTheme(theme)),
            Err(()) => ExecutionResult::error(vec![
                Line::error("Error: Invalid theme name."),
                Line::text(format!("Available themes: {}", theme_names())),
                Line::text("Usage: theme <theme_name>"),
            ]),
        }
    }
}

// ---------------------------------------------------------------------------
// typing
// ---------------------------------------------------------------------------

struct TypingCmd;
impl TypingCmd {
    fn usage() -> ExecutionResult {
        ExecutionResult::output(vec![
            Line::text("Typing animation controls:"),
            Line::entry("typing on", "Enable typing animation"),
            Line::entry("typing off", "Disable typing animation"),
            Line::entry(
                "typing speed <number>",
                "Set typing speed (characters per second)",
            ),
            Line::Empty,
            Line::text("Example: typing speed 100"),
        ])
    }

    fn speed(value: Option<&String>) -> ExecutionResult {
        let Some(value) = value else {
            return ExecutionResult::error(vec![
                Line::error("Error: Speed value required."),
                Line::text("Usage: typing speed <number>"),
            ]);
        };

        match value.parse::<u32>() {
            Ok(speed) if TYPING_SPEED_RANGE.contains(&speed) => ExecutionResult::text(format!(
                "Typing speed set to {speed} characters per second ✓"
            ))
            .with_action(SpecialAction::SetTypingSpeed(speed)),
            _ => ExecutionResult::error(vec![Line::error(format!(
                "Error: Speed must be a number between {} and {}.",
                TYPING_SPEED_RANGE.start(),
                TYPING_SPEED_RANGE.end()
            ))]),
        }
    }
}

impl Command for TypingCmd {
    fn name(&self) -> &str {
        "typing"
    }
    fn description(&self) -> &str {
        "Toggle typing animation. Usage: typing <on|off|speed [number]>"
    }
    fn execute(&self, args: &[String]) -> ExecutionResult {
        let Some(action) = args.first().map(|a| a.to_lowercase()) else {
            return Self::usage();
        };

        match action.as_str() {
            "on" => ExecutionResult::text("Typing animation enabled ✓")
                .with_action(SpecialAction::SetTypingAnimation(true)),
            "off" => ExecutionResult::text("Typing animation disabled ✓")
                .with_action(SpecialAction::SetTypingAnimation(false)),
            "speed" => Self::speed(args.get(1)),
            _ => ExecutionResult::error(vec![
                Line::error(format!("Error: Invalid action '{action}'.")),
                Line::text("Use: typing <on|off|speed [number]>"),
            ]),
        }
    }
}

// ---------------------------------------------------------------------------
// matrix / audio
// ---------------------------------------------------------------------------

/// Parses the optional `on`/`off` argument shared by the toggle commands.
fn parse_switch(command: &str, args: &[String]) -> Result<Switch, ExecutionResult> {
    Switch::from_arg(args.first().map(String::as_str)).ok_or_else(|| {
        ExecutionResult::error(vec![
            Line::error(format!(
                "Error: Invalid argument '{}'.",
                args.first().map(String::as_str).unwrap_or_default()
            )),
            Line::text(format!("Usage: {command} [on|off]")),
        ])
    })
}

struct MatrixCmd;
impl Command for MatrixCmd {
    fn name(&self) -> &str {
        "matrix"
    }
    fn description(&self) -> &str {
        "Toggle Matrix digital rain effect in terminal background."
    }
    fn execute(&self, args: &[String]) -> ExecutionResult {
        match parse_switch(self.name(), args) {
            Ok(switch) => {
                ExecutionResult::output(Vec::new()).with_action(SpecialAction::SetMatrix(switch))
            }
            Err(usage) => usage,
        }
    }
}

struct AudioCmd;
impl Command for AudioCmd {
    fn name(&self) -> &str {
        "audio"
    }
    fn description(&self) -> &str {
        "Toggle audio effects (typing sounds)."
    }
    fn execute(&self, args: &[String]) -> ExecutionResult {
        match parse_switch(self.name(), args) {
            Ok(switch) => {
                ExecutionResult::output(Vec::new()).with_action(SpecialAction::SetAudio(switch))
            }
            Err(usage) => usage,
        }
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clears the terminal history."
    }
    fn execute(&self, _args: &[String]) -> ExecutionResult {
        ExecutionResult::output(Vec::new()).with_action(SpecialAction::Clear)
    }
}

pub(super) fn register_settings_commands(reg: &mut CommandRegistry) -> Result<(), RegistryError> {
    reg.register_bulk([
        Box::new(ThemeCmd) as Box<dyn Command>,
        Box::new(TypingCmd),
        Box::new(MatrixCmd),
        Box::new(AudioCmd),
    ])?;
    reg.register(Box::new(ClearCmd), &["cls"])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_theme_without_args_lists_themes() {
        let result = ThemeCmd.execute(&[]);
        assert!(!result.is_error);
        assert_eq!(result.action, None);
        assert!(result.content.contains(&Line::info("  • hacker")));
    }

    #[test]
    fn test_theme_valid() {
        let result = ThemeCmd.execute(&args(&["hacker"]));
        assert_eq!(result.action, Some(SpecialAction::SetTheme(Theme::Hacker)));
        assert_eq!(result.content, vec![Line::text("Setting theme to 'hacker'...")]);
    }

    #[test]
    fn test_theme_invalid() {
        let result = ThemeCmd.execute(&args(&["solarized"]));
        assert!(result.is_error);
        assert_eq!(result.action, None);
        assert!(
            result
                .content
                .contains(&Line::text("Available themes: dark, light, hacker"))
        );
    }

    #[test]
    fn test_typing_on_off() {
        assert_eq!(
            TypingCmd.execute(&args(&["ON"])).action,
            Some(SpecialAction::SetTypingAnimation(true))
        );
        assert_eq!(
            TypingCmd.execute(&args(&["off"])).action,
            Some(SpecialAction::SetTypingAnimation(false))
        );
    }

    #[test]
    fn test_typing_speed_bounds() {
        assert_eq!(
            TypingCmd.execute(&args(&["speed", "120"])).action,
            Some(SpecialAction::SetTypingSpeed(120))
        );
        assert_eq!(
            TypingCmd.execute(&args(&["speed", "500"])).action,
            Some(SpecialAction::SetTypingSpeed(500))
        );
        for bad in ["0", "501", "-3", "fast"] {
            let result = TypingCmd.execute(&args(&["speed", bad]));
            assert!(result.is_error, "{bad}");
            assert_eq!(result.action, None);
        }
        assert!(TypingCmd.execute(&args(&["speed"])).is_error);
    }

    #[test]
    fn test_typing_usage_and_invalid_action() {
        let usage = TypingCmd.execute(&[]);
        assert!(!usage.is_error);
        assert_eq!(usage.action, None);

        let invalid = TypingCmd.execute(&args(&["sideways"]));
        assert!(invalid.is_error);
        assert_eq!(
            invalid.content.first(),
            Some(&Line::error("Error: Invalid action 'sideways'."))
        );
    }

    #[test]
    fn test_toggles() {
        assert_eq!(
            MatrixCmd.execute(&[]).action,
            Some(SpecialAction::SetMatrix(Switch::Toggle))
        );
        assert_eq!(
            AudioCmd.execute(&args(&["off"])).action,
            Some(SpecialAction::SetAudio(Switch::Off))
        );
        let bad = MatrixCmd.execute(&args(&["loud"]));
        assert!(bad.is_error);
        assert!(bad.content.contains(&Line::text("Usage: matrix [on|off]")));
    }

    #[test]
    fn test_clear_alias() {
        let mut reg = CommandRegistry::new();
        register_settings_commands(&mut reg).unwrap();
        let result = reg.get("cls").map(|cmd| cmd.execute(&[]));
        assert_eq!(
            result.and_then(|r| r.action),
            Some(SpecialAction::Clear)
        );
    }
}
