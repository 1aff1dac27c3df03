//! Keyword routing from a user's text to a reply template.
//!
//! [`Agent::respond`] looks only at the last message of a conversation,
//! classifies it with a fixed, priority-ordered list of intent handlers,
//! and returns the winning handler's text. The agent holds no state between
//! calls and can be shared freely across requests.

pub mod calc;
pub mod handler;
pub mod registry;
pub mod templates;

use crate::chat::WireMessage;
use crate::config::FallbackMode;
use crate::core::error::ChatError;
use handler::{
    AnalysisHandler, CalculationHandler, CodeHandler, ContentCreationHandler, GeneralHandler,
    HelpHandler, PlanningHandler, TranslationHandler,
};
use registry::IntentRegistry;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Calculation,
    Code,
    Translation,
    Planning,
    ContentCreation,
    Analysis,
    Help,
    General,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Calculation => "calculation",
            Intent::Code => "code",
            Intent::Translation => "translation",
            Intent::Planning => "planning",
            Intent::ContentCreation => "content-creation",
            Intent::Analysis => "analysis",
            Intent::Help => "help",
            Intent::General => "general",
        };
        f.write_str(name)
    }
}

pub struct Agent {
    registry: IntentRegistry,
}

impl Agent {
    pub fn new(fallback: FallbackMode) -> Self {
        let mut registry = IntentRegistry::new();

        registry.register(CalculationHandler);
        registry.register(CodeHandler);
        registry.register(TranslationHandler);
        registry.register(PlanningHandler);
        registry.register(ContentCreationHandler);
        registry.register(AnalysisHandler);
        registry.register(HelpHandler);
        registry.register(GeneralHandler::new(fallback));

        Self { registry }
    }

    /// Intents in the order they are tried.
    pub fn intents(&self) -> Vec<Intent> {
        self.registry.intents()
    }

    pub fn classify(&self, text: &str) -> Intent {
        self.registry
            .select(&text.to_lowercase())
            .map(|h| h.intent())
            .unwrap_or(Intent::General)
    }

    /// Replies to the last message of `messages`.
    pub fn respond(&self, messages: &[WireMessage]) -> Result<String, ChatError> {
        let last = messages
            .last()
            .ok_or_else(|| ChatError::Dispatch("conversation has no messages".to_string()))?;

        let handler = self
            .registry
            .select(&last.content.to_lowercase())
            .ok_or_else(|| ChatError::Dispatch("no intent handler matched".to_string()))?;

        Ok(handler.respond(&last.content))
    }
}
