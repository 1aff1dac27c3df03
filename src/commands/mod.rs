pub mod dispatcher;
pub mod handler;
pub mod registry;

use crate::chat::Conversation;
pub use dispatcher::create_command_registry;

pub struct ChatState {
    pub conversation: Conversation,
    /// Where messages are sent, shown by `/help`.
    pub target: String,
    pub should_continue: bool,
}

impl ChatState {
    pub fn new(target: &str) -> Self {
        Self {
            conversation: Conversation::new(),
            target: target.to_string(),
            should_continue: true,
        }
    }
}
