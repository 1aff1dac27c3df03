use super::ChatState;
use crate::commands::handler::CommandHandler;
use crate::core::error::ChatError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Slash commands by name. Lookup ignores case, so `/Clear` runs `clear`.
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, name: &'static str, command: impl CommandHandler + 'static) {
        self.commands.insert(name, Arc::new(command));
    }

    fn lookup(&self, name: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.commands.get(name.to_ascii_lowercase().as_str())
    }

    pub fn execute(
        &self,
        name: &str,
        args: &[&str],
        state: &mut ChatState,
    ) -> Result<Option<String>, ChatError> {
        let command = self.lookup(name).ok_or_else(|| {
            ChatError::Input(format!("Unknown command: /{} (try /help)", name))
        })?;
        command.execute(state, args)
    }

    /// Registered names in alphabetical order.
    pub fn get_command_names(&self) -> Vec<String> {
        self.commands.keys().map(|name| name.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handler::{ClearCommand, QuitCommand};

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register("quit", QuitCommand);
        registry.register("clear", ClearCommand);
        registry
    }

    #[test]
    fn names_are_sorted() {
        assert_eq!(registry().get_command_names(), vec!["clear", "quit"]);
    }

    #[test]
    fn lookup_ignores_case() {
        let mut state = ChatState::new("local agent");
        registry().execute("QUIT", &[], &mut state).unwrap();
        assert!(!state.should_continue);
    }

    #[test]
    fn unknown_command_points_at_help() {
        let mut state = ChatState::new("local agent");
        let err = registry().execute("nope", &[], &mut state).unwrap_err();
        assert!(err.to_string().contains("/nope (try /help)"));
    }
}
