//! `snake`: hands the terminal over to the Snake game.

use crate::error::RegistryError;
use crate::output::Line;
use crate::registry::{Command, CommandRegistry};
use crate::result::{DeferredTask, ExecutionResult, SpecialAction};

struct SnakeCmd;
impl Command for SnakeCmd {
    fn name(&self) -> &str {
        "snake"
    }
    fn description(&self) -> &str {
        "Play the classic Snake game in your terminal."
    }
    fn execute(&self, _args: &[String]) -> ExecutionResult {
        ExecutionResult::output(vec![Line::info("🐍 Starting Snake... press ESC to leave.")])
            .with_action(SpecialAction::Defer(DeferredTask::Snake))
    }
}

pub(super) fn register_snake_command(reg: &mut CommandRegistry) -> Result<(), RegistryError> {
    reg.register(Box::new(SnakeCmd), &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defers_to_game() {
        let result = SnakeCmd.execute(&[]);
        assert!(!result.is_error);
        assert_eq!(
            result.action,
            Some(SpecialAction::Defer(DeferredTask::Snake))
        );
    }
}
