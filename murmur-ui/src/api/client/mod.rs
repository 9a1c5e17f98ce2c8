use crate::config::Config;
use dioxus::prelude::{info, warn};
use reqwest::Client;
use shared_api::api::{
    AcceptanceResponse, MessagesResponse, SessionResponse, UpdateAcceptanceRequest,
    UpdateAcceptanceResponse,
};

/// Thin typed client over the Murmur HTTP API.
///
/// Exactly one failure kind is recognized at this layer: "request failed".
/// Non-2xx statuses are folded into the same error channel as transport
/// failures; callers surface both identically and never retry.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Config::from_env(),
        }
    }

    /// Client pointed at an explicit server, for tests and desktop builds.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Config::with_server_url(url),
        }
    }
}

impl ApiClient {
    /// GET /api/auth/session
    pub async fn session(&self) -> Result<SessionResponse, reqwest::Error> {
        let url = format!("{}/auth/session", self.config.api_base_url);
        info!("Fetching session from {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!("Session request failed: {}", e);
                e
            })?;
        response.json().await
    }

    /// GET /api/acceptmessage
    pub async fn acceptance(&self) -> Result<AcceptanceResponse, reqwest::Error> {
        let url = format!("{}/acceptmessage", self.config.api_base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!("Acceptance read failed: {}", e);
                e
            })?;
        response.json().await
    }

    /// POST /api/acceptmessage
    pub async fn update_acceptance(
        &self,
        accept_messages: bool,
    ) -> Result<UpdateAcceptanceResponse, reqwest::Error> {
        let url = format!("{}/acceptmessage", self.config.api_base_url);
        let payload = UpdateAcceptanceRequest { accept_messages };
        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!("Acceptance update failed: {}", e);
                e
            })?;
        response.json().await
    }

    /// GET /api/get-messages
    pub async fn messages(&self) -> Result<MessagesResponse, reqwest::Error> {
        let url = format!("{}/get-messages", self.config.api_base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!("Messages read failed: {}", e);
                e
            })?;
        response.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves `router` on an ephemeral port and returns the base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_messages_come_back_in_server_order() {
        let router = Router::new().route(
            "/api/get-messages",
            get(|| async {
                Json(serde_json::json!({
                    "messages": [
                        {"_id": "m1", "content": "first", "createdAt": "2025-03-01T10:00:00Z"},
                        {"_id": "m2", "content": "second", "createdAt": "2025-03-02T10:00:00Z"},
                    ]
                }))
            }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let response = client.messages().await.unwrap();
        let ids: Vec<&str> = response.messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_omitted_messages_field_reads_as_empty_list() {
        let router = Router::new().route(
            "/api/get-messages",
            get(|| async { Json(serde_json::json!({})) }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let response = client.messages().await.unwrap();
        assert!(response.messages.is_empty());
    }

    #[tokio::test]
    async fn test_each_call_issues_exactly_one_request() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/api/acceptmessage",
            get(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(serde_json::json!({ "isAcceptingMessages": true }))
                }
            }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let response = client.acceptance().await.unwrap();
        assert!(response.is_accepting_messages);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_update_sends_the_desired_flag_and_returns_the_message() {
        let router = Router::new().route(
            "/api/acceptmessage",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body, serde_json::json!({ "acceptMessages": true }));
                Json(serde_json::json!({ "message": "Now accepting" }))
            }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let response = client.update_acceptance(true).await.unwrap();
        assert_eq!(response.message, "Now accepting");
    }

    #[tokio::test]
    async fn test_non_2xx_is_a_request_failure() {
        let router = Router::new().route(
            "/api/acceptmessage",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        assert!(client.acceptance().await.is_err());
    }

    #[tokio::test]
    async fn test_session_with_no_user_reads_as_signed_out() {
        let router = Router::new().route(
            "/api/auth/session",
            get(|| async { Json(serde_json::json!({ "user": null })) }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let response = client.session().await.unwrap();
        assert!(response.user.is_none());
    }

    #[tokio::test]
    async fn test_session_with_user_carries_the_identity() {
        let router = Router::new().route(
            "/api/auth/session",
            get(|| async {
                Json(serde_json::json!({ "user": { "_id": "u1", "username": "alice" } }))
            }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let response = client.session().await.unwrap();
        assert_eq!(response.user.unwrap().username, "alice");
    }
}
