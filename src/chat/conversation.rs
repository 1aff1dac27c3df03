use super::message::{Message, Role, WireMessage};
use crate::core::error::ChatError;

pub const GREETING: &str = "Welcome! I'm your AI agent assistant. I can help you with various tasks like a human would:

• Answer questions and provide information
• Write and explain code
• Perform calculations and data analysis
• Translate languages
• Research topics
• Solve problems creatively
• Generate content and ideas
• Plan and organize tasks

What can I help you with today?";

pub const CLEARED: &str = "Chat cleared. How can I assist you?";

pub const APOLOGY: &str =
    "I apologize, but I encountered an error processing your request. Please try again.";

/// The message list owned by a presentation surface, plus its loading flag.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    loading: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::new(Role::System, GREETING)],
            loading: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Records the user's turn and returns the history to send, or `None`
    /// when the input is blank or a request is already in flight.
    pub fn begin_submit(&mut self, input: &str) -> Option<Vec<WireMessage>> {
        let input = input.trim();
        if input.is_empty() || self.loading {
            return None;
        }

        self.messages.push(Message::new(Role::User, input));
        self.loading = true;
        Some(self.messages.iter().map(Message::to_wire).collect())
    }

    /// Ends the in-flight request. Failures are replaced by a fixed apology.
    pub fn complete(&mut self, result: Result<String, ChatError>) -> &Message {
        let content = match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "chat request failed");
                APOLOGY.to_string()
            }
        };
        self.loading = false;
        self.messages.push(Message::new(Role::Assistant, content));
        &self.messages[self.messages.len() - 1]
    }

    /// Drops the whole history, leaving a single system notice.
    pub fn clear(&mut self) {
        self.messages = vec![Message::new(Role::System, CLEARED)];
    }
}
