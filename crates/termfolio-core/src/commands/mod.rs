//! Built-in command table.

mod coffee;
mod help;
mod links;
mod profile;
mod settings;
mod snake;
mod weather;

use std::sync::Arc;

pub use coffee::{
    ACHIEVEMENTS, Achievement, BrewOrder, CoffeeStats, CoffeeType, Strength, Temperature,
};

use crate::error::RegistryError;
use crate::registry::CommandRegistry;
use crate::storage::KeyValueStore;

/// Builds the registry of every built-in command.
///
/// `store` backs commands that persist their own state (coffee stats).
/// An error here means the static command table is inconsistent.
pub fn builtin_registry(store: Arc<dyn KeyValueStore>) -> Result<CommandRegistry, RegistryError> {
    let mut reg = CommandRegistry::new();
    profile::register_profile_commands(&mut reg)?;
    links::register_link_commands(&mut reg)?;
    settings::register_settings_commands(&mut reg)?;
    coffee::register_coffee_command(&mut reg, store)?;
    weather::register_weather_command(&mut reg)?;
    snake::register_snake_command(&mut reg)?;
    // last, so the listing covers everything above
    help::register_help_command(&mut reg)?;
    Ok(reg)
}
