use super::ChatBackend;
use crate::chat::{ChatRequest, ChatResponse, ErrorResponse, WireMessage};
use crate::core::error::ChatError;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;

/// Posts the history to a running chat endpoint.
pub struct HttpBackend {
    endpoint: String,
    client: Client,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ChatError> {
        let client = Client::builder().build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    async fn send_request<T: Serialize + ?Sized>(&self, payload: &T) -> Result<Response, ChatError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn send(&self, messages: &[WireMessage]) -> Result<String, ChatError> {
        let request = ChatRequest {
            messages: messages.to_vec(),
        };
        let response = self.send_request(&request).await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "no error body".to_string());
            return Err(ChatError::Api(format!("{}: {}", status, detail)));
        }

        let body = response.json::<ChatResponse>().await?;
        Ok(body.message)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use crate::config::{Config, FallbackMode};
    use crate::server::{self, AppState};
    use std::sync::Arc;

    async fn spawn_server() -> String {
        let state = Arc::new(AppState::new(
            Agent::new(FallbackMode::Hashed),
            Config::default(),
        ));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, server::router(state)).await.unwrap();
        });
        format!("http://{}/api/chat", addr)
    }

    #[tokio::test]
    async fn round_trips_through_the_endpoint() {
        let backend = HttpBackend::new(spawn_server().await).unwrap();

        let reply = backend
            .send(&[WireMessage::user("what is 12 * 4?")])
            .await
            .unwrap();

        assert!(reply.contains("The calculation result is: 48"));
    }

    #[tokio::test]
    async fn server_failures_surface_as_api_errors() {
        let backend = HttpBackend::new(spawn_server().await).unwrap();

        let err = backend.send(&[]).await.unwrap_err();

        match err {
            ChatError::Api(detail) => assert!(detail.contains("Failed to process request")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = HttpBackend::new(format!("http://{}/api/chat", addr)).unwrap();
        let err = backend.send(&[WireMessage::user("hi")]).await.unwrap_err();

        assert!(matches!(err, ChatError::Network(_)));
    }
}
