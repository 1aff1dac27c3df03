pub mod capability;
pub mod conversation;
pub mod message;

pub use capability::{CAPABILITIES, Capability};
pub use conversation::Conversation;
pub use message::{ChatRequest, ChatResponse, ErrorResponse, Message, Role, WireMessage};
