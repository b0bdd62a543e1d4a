//! `help`: command directory and keyboard shortcuts.

use crate::error::RegistryError;
use crate::output::Line;
use crate::registry::{Command, CommandRegistry};
use crate::result::ExecutionResult;

const SHORTCUTS: [(&str, &str); 5] = [
    ("Tab", "Autocomplete command (show suggestions if multiple matches)"),
    ("↑ / ↓", "Navigate through command history"),
    ("Enter", "Execute command"),
    ("Esc", "Close autocomplete suggestions"),
    ("Cmd/Ctrl + K", "Clear terminal"),
];

const NAME: &str = "help";
const DESCRIPTION: &str = "Lists all available commands.";
const ALIAS: &str = "?";

/// Lists commands captured when it was registered.
struct HelpCmd {
    /// (name, description), sorted by name
    listing: Vec<(String, String)>,
}

impl Command for HelpCmd {
    fn name(&self) -> &str {
        NAME
    }
    fn description(&self) -> &str {
        DESCRIPTION
    }
    fn execute(&self, _args: &[String]) -> ExecutionResult {
        let mut lines = vec![Line::heading("Available commands:")];
        lines.extend(
            self.listing
                .iter()
                .map(|(name, description)| Line::entry(name, description)),
        );
        lines.push(Line::Empty);
        lines.push(Line::heading("Keyboard shortcuts:"));
        lines.extend(SHORTCUTS.map(|(key, description)| Line::entry(key, description)));
        lines.push(Line::Empty);
        lines.push(Line::info(
            "Tip: Type a command and press Tab to see suggestions.",
        ));
        ExecutionResult::output(lines)
    }
}

/// Registers `help` (alias `?`) listing every command registered so far,
/// itself included. Register it last.
pub(super) fn register_help_command(reg: &mut CommandRegistry) -> Result<(), RegistryError> {
    let mut listing: Vec<(String, String)> = reg
        .all()
        .map(|cmd| {
            let aliases = reg.aliases_of(cmd.name());
            (cmd.name().to_string(), describe(cmd.description(), aliases.as_slice()))
        })
        .chain([(NAME.to_string(), describe(DESCRIPTION, &[ALIAS]))])
        .collect();
    listing.sort_by(|a, b| a.0.cmp(&b.0));

    reg.register(Box::new(HelpCmd { listing }), &[ALIAS])
}

/// Description with its aliases appended, e.g. `Clears the terminal history. (alias: cls)`.
fn describe(description: &str, aliases: &[impl AsRef<str>]) -> String {
    if aliases.is_empty() {
        return description.to_string();
    }
    let aliases: Vec<&str> = aliases.iter().map(AsRef::as_ref).collect();
    format!("{description} (alias: {})", aliases.join(", "))
}
