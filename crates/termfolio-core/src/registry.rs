//! Command trait and registry.
//!
//! The registry maps lower-cased names to commands and aliases to names.
//! Lookups are case-insensitive and listings keep registration order.

use std::collections::HashMap;

use crate::error::RegistryError;
use crate::result::ExecutionResult;

/// A single executable command.
pub trait Command: Send + Sync {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Execute with the argument tokens following the name.
    ///
    /// Commands validate their own arguments and report problems as
    /// error-styled results. They never touch the output log, history or
    /// registry.
    fn execute(&self, args: &[String]) -> ExecutionResult;
}

/// Registry of available commands and their aliases.
#[derive(Default)]
pub struct CommandRegistry {
    /// Commands in registration order, keyed by lower-cased name.
    commands: Vec<(String, Box<dyn Command>)>,
    /// Lower-cased alias -> lower-cased command name.
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `command` under its lower-cased name, binding `aliases` to it.
    ///
    /// Fails without modifying the registry if the name or any alias collides
    /// with an existing name or alias (or with each other).
    pub fn register(
        &mut self,
        command: Box<dyn Command>,
        aliases: &[&str],
    ) -> Result<(), RegistryError> {
        let name = command.name().to_lowercase();
        if self.is_taken(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        let mut bound: Vec<String> = Vec::with_capacity(aliases.len());
        for alias in aliases {
            let alias_lower = alias.to_lowercase();
            if self.is_taken(&alias_lower) || alias_lower == name || bound.contains(&alias_lower)
            {
                return Err(RegistryError::DuplicateAlias(alias.to_string()));
            }
            bound.push(alias_lower);
        }

        log::debug!("registered command '{name}' (aliases: {bound:?})");
        for alias in bound {
            self.aliases.insert(alias, name.clone());
        }
        self.commands.push((name, command));
        Ok(())
    }

    /// Registers each command in order, without aliases.
    ///
    /// Stops at the first failure; commands registered before it remain.
    pub fn register_bulk(
        &mut self,
        commands: impl IntoIterator<Item = Box<dyn Command>>,
    ) -> Result<(), RegistryError> {
        for command in commands {
            self.register(command, &[])?;
        }
        Ok(())
    }

    /// Looks up a command by name, then by alias (case-insensitive).
    pub fn get(&self, name_or_alias: &str) -> Option<&dyn Command> {
        let key = name_or_alias.to_lowercase();
        self.find(&key).or_else(|| {
            let target = self.aliases.get(&key)?;
            self.find(target)
        })
    }

    /// Whether `name_or_alias` resolves to a command.
    pub fn has(&self, name_or_alias: &str) -> bool {
        self.get(name_or_alias).is_some()
    }

    /// All commands in registration order.
    pub fn all(&self) -> impl Iterator<Item = &dyn Command> + '_ {
        self.commands.iter().map(|(_, cmd)| cmd.as_ref())
    }

    /// Registered primary names in registration order (aliases excluded).
    pub fn names(&self) -> Vec<String> {
        self.commands.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Aliases bound to `name`, sorted.
    pub fn aliases_of(&self, name: &str) -> Vec<String> {
        let name = name.to_lowercase();
        let mut aliases: Vec<String> = self
            .aliases
            .iter()
            .filter(|(_, target)| **target == name)
            .map(|(alias, _)| alias.clone())
            .collect();
        aliases.sort();
        aliases
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Removes the command `name` and every alias bound to it.
    ///
    /// Returns whether anything was removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        let name = name.to_lowercase();
        let aliases_before = self.aliases.len();
        self.aliases.retain(|_, target| *target != name);
        let aliases_removed = self.aliases.len() != aliases_before;

        let commands_before = self.commands.len();
        self.commands.retain(|(n, _)| *n != name);
        let command_removed = self.commands.len() != commands_before;

        command_removed || aliases_removed
    }

    /// Removes every command and alias.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.aliases.clear();
    }

    fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, cmd)| cmd.as_ref())
    }

    fn is_taken(&self, key: &str) -> bool {
        self.find(key).is_some() || self.aliases.contains_key(key)
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("names", &self.names())
            .field("aliases", &self.aliases)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal command echoing its name and arguments.
    pub(crate) struct Stub {
        name: &'static str,
    }

    impl Stub {
        pub(crate) fn boxed(name: &'static str) -> Box<dyn Command> {
            Box::new(Self { name })
        }
    }

    impl Command for Stub {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "stub command"
        }

        fn execute(&self, args: &[String]) -> ExecutionResult {
            ExecutionResult::text(format!("{} {}", self.name, args.join(",")))
        }
    }

    #[test]
    fn test_register_and_lookup_case_insensitive() {
        let mut registry = CommandRegistry::new();
        registry.register(Stub::boxed("Help"), &[]).unwrap();

        assert!(registry.has("help"));
        assert!(registry.has("HELP"));
        assert_eq!(registry.get("hElP").map(|c| c.name()), Some("Help"));
        assert_eq!(registry.names(), vec!["help"]);
    }

    #[test]
    fn test_aliases_resolve() {
        let mut registry = CommandRegistry::new();
        registry.register(Stub::boxed("cmda"), &["a1", "a2"]).unwrap();

        for key in ["A1", "a1", "A2", "cmda"] {
            assert_eq!(registry.get(key).map(|c| c.name()), Some("cmda"), "{key}");
        }
        assert_eq!(registry.names(), vec!["cmda"]);
        assert_eq!(registry.aliases_of("CMDA"), vec!["a1", "a2"]);
    }

    #[test]
    fn test_name_colliding_with_alias_fails() {
        let mut registry = CommandRegistry::new();
        registry.register(Stub::boxed("cmda"), &["a1"]).unwrap();

        assert_eq!(
            registry.register(Stub::boxed("a1"), &[]),
            Err(RegistryError::DuplicateName("a1".to_string()))
        );
        assert_eq!(
            registry.register(Stub::boxed("CMDA"), &[]),
            Err(RegistryError::DuplicateName("cmda".to_string()))
        );
    }

    #[test]
    fn test_alias_collisions_fail_atomically() {
        let mut registry = CommandRegistry::new();
        registry.register(Stub::boxed("help"), &["?"]).unwrap();

        // second alias collides with an existing name
        let err = registry.register(Stub::boxed("hint"), &["h", "HELP"]);
        assert_eq!(err, Err(RegistryError::DuplicateAlias("HELP".to_string())));
        assert!(!registry.has("hint"));
        assert!(!registry.has("h"));

        assert!(matches!(
            registry.register(Stub::boxed("quit"), &["?"]),
            Err(RegistryError::DuplicateAlias(_))
        ));
        assert!(matches!(
            registry.register(Stub::boxed("exit"), &["q", "Q"]),
            Err(RegistryError::DuplicateAlias(_))
        ));
    }

    #[test]
    fn test_register_bulk_stops_at_first_failure() {
        let mut registry = CommandRegistry::new();
        let result = registry.register_bulk([
            Stub::boxed("one"),
            Stub::boxed("two"),
            Stub::boxed("ONE"),
            Stub::boxed("three"),
        ]);

        assert!(result.is_err());
        assert_eq!(registry.names(), vec!["one", "two"]);
    }

    #[test]
    fn test_listing_keeps_registration_order() {
        let mut registry = CommandRegistry::new();
        registry
            .register_bulk([Stub::boxed("zeta"), Stub::boxed("alpha"), Stub::boxed("mid")])
            .unwrap();

        assert_eq!(registry.names(), vec!["zeta", "alpha", "mid"]);
        let names: Vec<&str> = registry.all().map(|c| c.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_unregister_removes_aliases() {
        let mut registry = CommandRegistry::new();
        registry.register(Stub::boxed("cmda"), &["a1", "a2"]).unwrap();
        registry.register(Stub::boxed("cmdb"), &["b1"]).unwrap();

        assert!(registry.unregister("CMDA"));
        assert!(!registry.has("cmda"));
        assert!(!registry.has("a1"));
        assert!(!registry.has("a2"));
        assert!(registry.has("b1"));
        assert!(!registry.unregister("cmda"));

        // freed names can be reused
        registry.register(Stub::boxed("a1"), &[]).unwrap();
    }

    #[test]
    fn test_clear() {
        let mut registry = CommandRegistry::new();
        registry.register(Stub::boxed("cmda"), &["a1"]).unwrap();
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.has("a1"));
    }

    #[test]
    fn test_execute_through_lookup() {
        let mut registry = CommandRegistry::new();
        registry.register(Stub::boxed("echo"), &[]).unwrap();
        let result = registry
            .get("echo")
            .map(|cmd| cmd.execute(&["a".to_string(), "b".to_string()]));
        assert_eq!(result, Some(ExecutionResult::text("echo a,b")));
    }
}
