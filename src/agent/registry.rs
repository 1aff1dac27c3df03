use super::Intent;
use super::handler::IntentHandler;
use std::sync::Arc;

/// Intent handlers in priority order. The first handler whose
/// `matches` accepts the text wins.
pub struct IntentRegistry {
    handlers: Vec<Arc<dyn IntentHandler>>,
}

impl IntentRegistry {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn register<H: IntentHandler + 'static>(&mut self, handler: H) {
        self.handlers.push(Arc::new(handler));
    }

    pub fn select(&self, lowered: &str) -> Option<&Arc<dyn IntentHandler>> {
        self.handlers.iter().find(|h| h.matches(lowered))
    }

    pub fn intents(&self) -> Vec<Intent> {
        self.handlers.iter().map(|h| h.intent()).collect()
    }
}
