use super::state::AppState;
use crate::chat::{CAPABILITIES, Capability, ChatRequest, ChatResponse};
use crate::core::error::ChatError;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/capabilities", get(capabilities))
        .route("/api/chat", post(chat))
}

/// The browser chat page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn capabilities() -> Json<&'static [Capability]> {
    Json(&CAPABILITIES)
}

/// `POST /api/chat`: replies to the last message of the posted history.
///
/// The body is parsed as JSON whatever its `Content-Type`. Malformed bodies
/// are folded into the same 500 response as any other failure.
async fn chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ChatError> {
    let request: ChatRequest = serde_json::from_slice(&body)?;
    if let Some(last) = request.messages.last() {
        let intent = state.agent.classify(&last.content);
        info!(messages = request.messages.len(), %intent, "chat request");
    }

    let message = state.agent.respond(&request.messages)?;
    Ok(Json(ChatResponse { message }))
}

#[cfg(test)]
mod tests {
    use crate::agent::Agent;
    use crate::chat::conversation::{APOLOGY, CLEARED, GREETING};
    use crate::config::{Config, FallbackMode};
    use crate::server::{self, AppState};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = Arc::new(AppState::new(
            Agent::new(FallbackMode::Hashed),
            Config::default(),
        ));
        server::router(state)
    }

    async fn post_chat(body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn chat_returns_message() {
        let body = json!({ "messages": [
            { "role": "assistant", "content": "Welcome!" },
            { "role": "user", "content": "what is 12 * 4?" }
        ]});

        let (status, json) = post_chat(body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["message"].as_str().unwrap().contains("The calculation result is: 48"));
    }

    #[tokio::test]
    async fn chat_accepts_body_without_content_type() {
        let body = json!({ "messages": [{ "role": "user", "content": "7 - 2" }] });
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["message"].as_str().unwrap().contains("The calculation result is: 5"));
    }

    #[tokio::test]
    async fn malformed_json_is_a_generic_500() {
        let (status, json) = post_chat("{not json").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({ "error": "Failed to process request" }));
    }

    #[tokio::test]
    async fn wrong_shape_is_a_generic_500() {
        let (status, json) = post_chat(json!({ "prompt": "hi" }).to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to process request");
    }

    #[tokio::test]
    async fn empty_history_is_a_generic_500() {
        let (status, json) = post_chat(json!({ "messages": [] }).to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to process request");
    }

    #[tokio::test]
    async fn index_serves_the_chat_page() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("/api/chat"));
    }

    #[test]
    fn page_texts_match_the_terminal_conversation() {
        let page = super::INDEX_HTML;
        let greeting = GREETING.replace('\n', "\\n");

        let mut embedded = String::new();
        for line in page.lines().skip_while(|l| !l.starts_with("const GREETING")) {
            embedded.push_str(line);
            if line.trim_end().ends_with(';') {
                break;
            }
        }
        let joined: String = embedded.split('"').skip(1).step_by(2).collect();

        assert_eq!(joined, greeting);
        assert!(page.contains(&format!("const CLEARED = \"{}\";", CLEARED)));
        assert!(page.contains(&format!("const APOLOGY = \"{}\";", APOLOGY)));
    }

    #[tokio::test]
    async fn capabilities_lists_five_entries() {
        let request = Request::builder()
            .uri("/api/capabilities")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            ["Problem Solving", "Code Generation", "Calculations", "Research", "Translation"]
        );
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["status"], "ok");
    }
}
