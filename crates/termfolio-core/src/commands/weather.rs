//! `weather <city>`: deferred lookup of current conditions.

use crate::error::RegistryError;
use crate::output::Line;
use crate::registry::{Command, CommandRegistry};
use crate::result::{DeferredTask, ExecutionResult, SpecialAction};
use crate::weather::pending_lines;

struct WeatherCmd;
impl Command for WeatherCmd {
    fn name(&self) -> &str {
        "weather"
    }
    fn description(&self) -> &str {
        "Get current weather information for any city. Usage: weather <city>"
    }
    fn execute(&self, args: &[String]) -> ExecutionResult {
        let city = args.join(" ");
        if city.trim().is_empty() {
            return ExecutionResult::error(vec![
                Line::info("⚠️ Usage: weather <city>"),
                Line::text("Example: weather Tokyo or weather New York"),
            ]);
        }

        ExecutionResult::output(pending_lines(&city))
            .with_action(SpecialAction::Defer(DeferredTask::Weather { city }))
    }
}

pub(super) fn register_weather_command(reg: &mut CommandRegistry) -> Result<(), RegistryError> {
    reg.register(Box::new(WeatherCmd), &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_city() {
        let result = WeatherCmd.execute(&[]);
        assert!(result.is_error);
        assert_eq!(result.action, None);
    }

    #[test]
    fn test_defers_with_joined_city() {
        let args = vec!["New".to_string(), "York".to_string()];
        let result = WeatherCmd.execute(&args);

        assert!(!result.is_error);
        assert_eq!(result.content, pending_lines("New York"));
        assert_eq!(
            result.action,
            Some(SpecialAction::Defer(DeferredTask::Weather {
                city: "New York".to_string()
            }))
        );
    }
}
