use std::io;
use thiserror::Error;

/// Unified error type for the agentchat application
#[derive(Error, Debug)]
pub enum ChatError {
    /// The chat endpoint answered with a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input errors
    #[error("Input error: {0}")]
    Input(String),

    /// The dispatch component could not produce a reply
    #[error("Dispatch error: {0}")]
    Dispatch(String),

    /// IO-related errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ChatError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            ChatError::Network(format!("Connection failed: {}", err))
        } else if err.is_status() {
            ChatError::Api(format!("Endpoint returned error status: {}", err))
        } else if err.is_decode() {
            ChatError::Serialization(format!("Malformed response body: {}", err))
        } else {
            ChatError::Network(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yml::Error> for ChatError {
    fn from(err: serde_yml::Error) -> Self {
        ChatError::Serialization(format!("YAML error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_source() {
        let err: ChatError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, ChatError::Io { .. }));
        assert_eq!(err.to_string(), "IO error: missing");
    }

    #[test]
    fn json_errors_become_serialization_errors() {
        let err: ChatError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }
}
