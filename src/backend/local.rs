use super::ChatBackend;
use crate::agent::Agent;
use crate::chat::WireMessage;
use crate::core::error::ChatError;
use async_trait::async_trait;
use std::sync::Arc;

/// Answers in-process, without a server.
pub struct LocalBackend {
    agent: Arc<Agent>,
}

impl LocalBackend {
    pub fn new(agent: Arc<Agent>) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl ChatBackend for LocalBackend {
    async fn send(&self, messages: &[WireMessage]) -> Result<String, ChatError> {
        self.agent.respond(messages)
    }

    fn describe(&self) -> String {
        "in-process agent".to_string()
    }
}
