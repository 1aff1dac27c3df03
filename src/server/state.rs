//! Shared application state injected into every Axum handler.

use crate::agent::Agent;
use crate::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<Agent>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(agent: impl Into<Arc<Agent>>, config: Config) -> Self {
        Self {
            agent: agent.into(),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FallbackMode;

    #[test]
    fn shares_an_existing_agent() {
        let agent = Arc::new(Agent::new(FallbackMode::Hashed));
        let state = AppState::new(Arc::clone(&agent), Config::default());
        assert!(Arc::ptr_eq(&state.agent, &agent));
    }
}
