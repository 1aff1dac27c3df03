use crate::chat::WireMessage;
use crate::core::error::ChatError;
use async_trait::async_trait;

pub mod http;
pub mod local;

pub use http::HttpBackend;
pub use local::LocalBackend;

/// Where a presentation surface sends its history to get a reply.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, messages: &[WireMessage]) -> Result<String, ChatError>;

    /// Short human-readable description of the target.
    fn describe(&self) -> String;
}
