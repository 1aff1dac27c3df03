use crate::agent::Agent;
use crate::backend::{ChatBackend, HttpBackend, LocalBackend};
use crate::cli::Args;
use crate::commands::{ChatState, dispatcher::CommandDispatcher};
use crate::config::Config;
use crate::core::error::ChatError;
use crate::display;
use crate::input;
use crate::server::{self, AppState};
use is_terminal::IsTerminal;
use std::io::{self, Read};
use std::sync::Arc;

pub struct Application {
    pub args: Args,
    pub config: Config,
    pub agent: Arc<Agent>,
    pub command_dispatcher: CommandDispatcher,
}

impl Application {
    pub fn new(args: Args, config: Config, command_dispatcher: CommandDispatcher) -> Self {
        let agent = Arc::new(Agent::new(config.fallback));
        Self {
            args,
            config,
            agent,
            command_dispatcher,
        }
    }

    pub async fn run(&mut self) -> Result<(), ChatError> {
        if self.args.serve {
            return self.handle_serve_mode().await;
        }

        let context = if !io::stdin().is_terminal() {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ChatError::Input(format!("Failed to read from stdin: {}", e)))?;
            Some(buffer)
        } else {
            None
        };

        if self.args.chat {
            self.handle_continuous_chat_mode().await
        } else {
            self.handle_chat_mode(context).await
        }
    }

    fn backend(&self) -> Result<Box<dyn ChatBackend>, ChatError> {
        if self.args.local {
            Ok(Box::new(LocalBackend::new(Arc::clone(&self.agent))))
        } else {
            Ok(Box::new(HttpBackend::new(self.config.client.endpoint.clone())?))
        }
    }

    async fn handle_serve_mode(&self) -> Result<(), ChatError> {
        display::display_server_banner(&self.config.server.bind_address);
        let state = Arc::new(AppState::new(Arc::clone(&self.agent), self.config.clone()));
        server::serve(state).await
    }

    async fn handle_continuous_chat_mode(&mut self) -> Result<(), ChatError> {
        let backend = self.backend()?;
        let mut state = ChatState::new(&backend.describe());

        for message in state.conversation.messages() {
            display::display_message(message);
        }
        println!(
            "\nEntering chat mode. Type '/help' for available commands. Press Ctrl+D or type /quit to exit."
        );

        let mut editor = input::create_editor(self.command_dispatcher.clone())?;

        loop {
            let input = match input::read_input(&mut editor)? {
                Some(input) => input.trim().to_string(),
                None => break,
            };

            if input.is_empty() {
                continue;
            }

            if input.starts_with('/') {
                match self.command_dispatcher.execute_line(&input, &mut state) {
                    Ok(Some(output)) => println!("{}", output),
                    Ok(None) => {}
                    Err(e) => display::display_error(&format!("Error executing command: {}", e)),
                }

                if !state.should_continue {
                    break;
                }
                continue;
            }

            let Some(history) = state.conversation.begin_submit(&input) else {
                continue;
            };

            display::display_thinking();
            let result = backend.send(&history).await;
            display::clear_thinking();

            let reply = state.conversation.complete(result);
            display::display_message(reply);
        }

        Ok(())
    }

    async fn handle_chat_mode(&self, context: Option<String>) -> Result<(), ChatError> {
        let final_query = match (self.args.query.as_deref(), context) {
            (Some(arg_q), Some(stdin_ctx)) => format!("{}\n\n{}", stdin_ctx.trim_end(), arg_q),
            (None, Some(stdin_ctx)) => stdin_ctx,
            (Some(arg_q), None) => arg_q.to_string(),
            (None, None) => {
                return Err(ChatError::Input(
                    "No query provided (pass one, pipe one in, or use --chat / --serve)".to_string(),
                ));
            }
        };

        let backend = self.backend()?;
        let mut state = ChatState::new(&backend.describe());
        let Some(history) = state.conversation.begin_submit(&final_query) else {
            return Err(ChatError::Input("Query is empty".to_string()));
        };

        let result = backend.send(&history).await;
        let reply = state.conversation.complete(result);

        if display::looks_like_markdown(&reply.content) {
            display::display_markdown(&reply.content);
        } else {
            display::display_response(&reply.content);
        }

        Ok(())
    }
}
