use super::ChatState;
use crate::chat::CAPABILITIES;
use crate::core::error::ChatError;
use crate::display;

use console::style;

pub trait CommandHandler: Send + Sync {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, ChatError>;
    fn help(&self) -> &'static str;
}

pub struct QuitCommand;
pub struct HelpCommand;
pub struct ClearCommand;
pub struct HistoryCommand;
pub struct CapabilitiesCommand;

impl CommandHandler for QuitCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        state.should_continue = false;
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/quit - Exit the chat session"
    }
}

impl CommandHandler for HelpCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        let title = style("Available Commands").bold().underlined();
        let help_text = [
            title.to_string(),
            style(QuitCommand.help()).to_string(),
            style(HelpCommand.help()).to_string(),
            style(ClearCommand.help()).to_string(),
            style(HistoryCommand.help()).to_string(),
            style(CapabilitiesCommand.help()).to_string(),
            String::new(),
            format!("Messages are sent to: {}", style(&state.target).cyan()),
        ]
        .join("\n");

        Ok(Some(help_text))
    }

    fn help(&self) -> &'static str {
        "/help - Show available commands"
    }
}

impl CommandHandler for ClearCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        state.conversation.clear();
        Ok(Some("Chat history cleared.".to_string()))
    }

    fn help(&self) -> &'static str {
        "/clear - Clear conversation history"
    }
}

impl CommandHandler for HistoryCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        for message in state.conversation.messages() {
            display::display_message(message);
        }
        Ok(Some(format!(
            "{} message(s) in this session.",
            state.conversation.messages().len()
        )))
    }

    fn help(&self) -> &'static str {
        "/history - Show the conversation so far"
    }
}

impl CommandHandler for CapabilitiesCommand {
    fn execute(
        &self,
        _state: &mut ChatState,
        _args: &[&str],
    ) -> Result<Option<String>, ChatError> {
        let lines: Vec<String> = CAPABILITIES
            .iter()
            .map(|cap| {
                format!(
                    "{} {} - {}",
                    cap.icon,
                    style(cap.name).bold(),
                    style(cap.description).dim()
                )
            })
            .collect();
        Ok(Some(lines.join("\n")))
    }

    fn help(&self) -> &'static str {
        "/capabilities - List what the assistant can do"
    }
}
