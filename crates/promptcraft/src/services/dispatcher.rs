//! Request Dispatcher - Sends compiled prompts to a chat-completion endpoint
//!
//! Two modes:
//! - direct: POST to OpenRouter with the user's key as a bearer token
//! - proxied: POST to `<proxy origin>/api/openrouter`, the proxy holds the key
//!
//! One request, one response. There is no retry, no timeout and no
//! streaming; every failure is surfaced once as a [`DispatchError`].

use reqwest::Client;

use crate::domain::{DispatchError, DispatchMode, DispatchSettings};
use crate::ports::{ChatCompletionRequest, ChatCompletionResponse};

pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const PROXY_PATH: &str = "/api/openrouter";
pub const APP_TITLE: &str = "AI Prompt Assistant";
pub const DEFAULT_MAX_TOKENS: u32 = 800;
/// Upstream error bodies are cut to this many characters
pub const BODY_EXCERPT_CHARS: usize = 180;

/// Endpoints and descriptive headers used by the dispatcher
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Upstream chat-completion URL for direct mode
    pub upstream_url: String,
    /// Origin of the proxy; [`PROXY_PATH`] is appended
    pub proxy_base_url: String,
    /// Sent as `HTTP-Referer` in direct mode
    pub app_url: String,
    /// Sent as `X-Title` in direct mode
    pub app_title: String,
    pub max_tokens: Option<u32>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            upstream_url: OPENROUTER_URL.to_string(),
            proxy_base_url: "http://localhost:8000".to_string(),
            app_url: "http://localhost".to_string(),
            app_title: APP_TITLE.to_string(),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
        }
    }
}

impl DispatcherConfig {
    pub fn proxy_url(&self) -> String {
        format!("{}{}", self.proxy_base_url.trim_end_matches('/'), PROXY_PATH)
    }
}

/// Chat-completion client
#[derive(Clone)]
pub struct RequestDispatcher {
    client: Client,
    config: DispatcherConfig,
}

impl RequestDispatcher {
    pub fn new(config: DispatcherConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: DispatcherConfig) -> Self {
        Self { client, config }
    }

    /// URL a dispatch in `mode` will target
    pub fn endpoint(&self, mode: DispatchMode) -> String {
        match mode {
            DispatchMode::Direct => self.config.upstream_url.clone(),
            DispatchMode::Proxied => self.config.proxy_url(),
        }
    }

    /// Send `prompt` as a single user message and return the reply text.
    ///
    /// A missing first choice or empty content yields `Ok("")`.
    pub async fn dispatch(
        &self,
        prompt: &str,
        settings: &DispatchSettings,
    ) -> Result<String, DispatchError> {
        let request = ChatCompletionRequest::single(
            settings.model.clone(),
            prompt,
            settings.temperature,
            self.config.max_tokens,
        );

        let url = self.endpoint(settings.mode);
        let builder = match settings.mode {
            DispatchMode::Direct => {
                if !settings.has_credential() {
                    return Err(DispatchError::MissingCredential);
                }
                self.client
                    .post(&url)
                    .bearer_auth(settings.api_key.trim())
                    .header("HTTP-Referer", &self.config.app_url)
                    .header("X-Title", &self.config.app_title)
            }
            DispatchMode::Proxied => self.client.post(&url),
        };

        tracing::debug!(
            "Dispatching {} chars to {} ({} mode, model {})",
            prompt.len(),
            url,
            settings.mode,
            settings.model
        );

        let response = builder
            .json(&request)
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Chat completion failed with status {}", status);
            return Err(DispatchError::Upstream {
                status: status.as_u16(),
                body_excerpt: excerpt(&body, BODY_EXCERPT_CHARS),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| DispatchError::InvalidResponse(e.to_string()))?;

        Ok(parsed.first_content())
    }
}

/// Cut to `max_chars` characters (not bytes)
fn excerpt(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    const HELLO: &str = r#"{"choices":[{"message":{"content":"Hello"}}]}"#;

    fn dispatcher_for(server: &Server) -> RequestDispatcher {
        RequestDispatcher::new(DispatcherConfig {
            upstream_url: format!("{}/api/v1/chat/completions", server.url()),
            proxy_base_url: server.url(),
            app_url: "https://promptcraft.test".to_string(),
            ..DispatcherConfig::default()
        })
    }

    fn direct(key: &str) -> DispatchSettings {
        DispatchSettings {
            mode: DispatchMode::Direct,
            api_key: key.to_string(),
            ..DispatchSettings::default()
        }
    }

    #[tokio::test]
    async fn test_direct_without_key_makes_no_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let result = dispatcher_for(&server).dispatch("hi", &direct("  ")).await;

        assert_eq!(result, Err(DispatchError::MissingCredential));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_direct_sends_bearer_and_app_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/chat/completions")
            .match_header("authorization", "Bearer sk-or-test")
            .match_header("x-title", APP_TITLE)
            .match_header("http-referer", "https://promptcraft.test")
            .match_body(Matcher::PartialJson(json!({
                "messages": [{"role": "user", "content": "Say hello"}],
                "max_tokens": 800
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(HELLO)
            .create_async()
            .await;

        let reply = dispatcher_for(&server)
            .dispatch("Say hello", &direct("sk-or-test"))
            .await;

        assert_eq!(reply, Ok("Hello".to_string()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_proxied_targets_proxy_path_and_passes_values_through() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PROXY_PATH)
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::PartialJson(json!({
                "model": "custom/model:free",
                "temperature": 0.25
            })))
            .with_status(200)
            .with_body(HELLO)
            .create_async()
            .await;

        let settings = DispatchSettings {
            mode: DispatchMode::Proxied,
            model: "custom/model:free".to_string(),
            temperature: 0.25,
            api_key: String::new(),
        };
        let reply = dispatcher_for(&server).dispatch("hi", &settings).await;

        assert_eq!(reply, Ok("Hello".to_string()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_surfaces_upstream_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/v1/chat/completions")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let result = dispatcher_for(&server).dispatch("hi", &direct("k")).await;

        assert_eq!(
            result,
            Err(DispatchError::Upstream {
                status: 429,
                body_excerpt: "rate limited".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_error_body_is_truncated() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/v1/chat/completions")
            .with_status(500)
            .with_body("é".repeat(500))
            .create_async()
            .await;

        match dispatcher_for(&server).dispatch("hi", &direct("k")).await {
            Err(DispatchError::Upstream { status, body_excerpt }) => {
                assert_eq!(status, 500);
                assert_eq!(body_excerpt.chars().count(), BODY_EXCERPT_CHARS);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_choice_is_empty_reply() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let reply = dispatcher_for(&server).dispatch("hi", &direct("k")).await;
        assert_eq!(reply, Ok(String::new()));
    }

    #[tokio::test]
    async fn test_null_choices_is_empty_reply() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":null}"#)
            .create_async()
            .await;

        let reply = dispatcher_for(&server).dispatch("hi", &direct("k")).await;
        assert_eq!(reply, Ok(String::new()));
    }

    #[tokio::test]
    async fn test_non_json_success_is_invalid_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/v1/chat/completions")
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let result = dispatcher_for(&server).dispatch("hi", &direct("k")).await;
        assert!(matches!(result, Err(DispatchError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let dispatcher = RequestDispatcher::new(DispatcherConfig {
            upstream_url: "http://127.0.0.1:1/api/v1/chat/completions".to_string(),
            ..DispatcherConfig::default()
        });

        let result = dispatcher.dispatch("hi", &direct("k")).await;
        assert!(matches!(result, Err(DispatchError::Transport(_))));
    }

    #[test]
    fn test_proxy_url_joins_without_double_slash() {
        let config = DispatcherConfig {
            proxy_base_url: "https://app.example.com/".to_string(),
            ..DispatcherConfig::default()
        };
        assert_eq!(config.proxy_url(), "https://app.example.com/api/openrouter");
    }
}
