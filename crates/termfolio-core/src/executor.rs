//! Command-line parsing and dispatch.
//!
//! Grammar: `<name> [arg ...]`, tokens split on runs of whitespace, name
//! matched case-insensitively. No quoting or escaping.

use crate::config::{MAX_SUGGESTIONS, SUGGESTION_THRESHOLD};
use crate::output::Line;
use crate::registry::CommandRegistry;
use crate::result::ExecutionResult;
use crate::similarity::find_similar_strings;

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased command name
    pub name: String,
    pub args: Vec<String>,
}

/// Splits `raw` into a lower-cased name and its arguments.
///
/// Returns `None` for blank input.
pub fn parse_command_line(raw: &str) -> Option<ParsedCommand> {
    let mut tokens = raw.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some(ParsedCommand { name, args })
}

/// "Did you mean" candidates for an unknown command name.
pub fn suggest_commands(
    registry: &CommandRegistry,
    input: &str,
    threshold: f64,
    max_suggestions: usize,
) -> Vec<String> {
    find_similar_strings(input, &registry.names(), threshold, max_suggestions)
}

/// Parses and executes one input line against `registry`.
///
/// A known command's result is returned as-is. An unknown name yields an
/// error result naming it, with close matches when any exist.
pub fn execute_command(registry: &CommandRegistry, raw: &str) -> ExecutionResult {
    let Some(ParsedCommand { name, args }) = parse_command_line(raw) else {
        return ExecutionResult::output(Vec::new());
    };

    if let Some(command) = registry.get(&name) {
        log::debug!("dispatching '{name}' with {} arg(s)", args.len());
        return command.execute(&args);
    }

    let suggestions = suggest_commands(registry, &name, SUGGESTION_THRESHOLD, MAX_SUGGESTIONS);
    not_found(&name, &suggestions)
}

fn not_found(name: &str, suggestions: &[String]) -> ExecutionResult {
    let mut lines = vec![Line::error(format!("Error: Command '{name}' not found."))];
    if !suggestions.is_empty() {
        lines.push(Line::info(format!(
            "Did you mean: {}?",
            suggestions.join(", ")
        )));
    }
    lines.push(Line::text("Type 'help' to see available commands."));
    ExecutionResult::error(lines)
}
