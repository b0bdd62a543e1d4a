//! Registry and similarity behaviour through the public API.

use termfolio_core::{
    Command, CommandRegistry, ExecutionResult, RegistryError, calculate_similarity,
    find_similar_strings, levenshtein_distance,
};

struct Named(&'static str);

impl Command for Named {
    fn name(&self) -> &str {
        self.0
    }
    fn description(&self) -> &str {
        "test command"
    }
    fn execute(&self, args: &[String]) -> ExecutionResult {
        ExecutionResult::text(args.join(" "))
    }
}

#[test]
fn aliases_resolve_case_insensitively() {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(Named("cmdA")), &["a1", "a2"]).unwrap();

    for key in ["A1", "a1", "A2", "CMDA"] {
        assert_eq!(registry.get(key).map(|c| c.name()), Some("cmdA"));
    }
    assert_eq!(
        registry.register(Box::new(Named("a1")), &[]).unwrap_err(),
        RegistryError::DuplicateName("a1".to_string())
    );
}

#[test]
fn unregister_drops_aliases() {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(Named("cmdA")), &["a1", "a2"]).unwrap();
    assert!(registry.unregister("cmda"));
    assert!(!registry.has("a1"));
    assert!(!registry.has("a2"));
    assert!(registry.is_empty());
}

#[test]
fn failed_registration_leaves_registry_unchanged() {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(Named("help")), &[]).unwrap();
    let err = registry.register(Box::new(Named("hint")), &["h", "help"]);
    assert!(matches!(err, Err(RegistryError::DuplicateAlias(_))));
    assert_eq!(registry.names(), vec!["help"]);
    assert!(!registry.has("h"));
}

#[test]
fn similarity_properties() {
    for s in ["", "help", "Ünïcödé", "kitten"] {
        assert_eq!(levenshtein_distance(s, s), 0);
        assert_eq!(calculate_similarity(s, s), 1.0);
    }
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);

    let commands = ["help", "clear", "theme", "skills"];
    assert_eq!(find_similar_strings("hlp", &commands, 0.5, 3), vec!["help"]);
    assert!(find_similar_strings("xyz", &commands, 0.5, 3).is_empty());
}
