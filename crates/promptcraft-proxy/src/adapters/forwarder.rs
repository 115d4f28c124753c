//! Upstream Forwarder
//!
//! The forwarding logic shared by every proxy adapter: inject the server-held
//! key, POST to OpenRouter, hand back status and body untouched.

use reqwest::Client;
use thiserror::Error;

use crate::config::ProxyConfig;
use crate::models::ProxyRequest;

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("Missing OPENROUTER_API_KEY")]
    MissingCredential,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0}")]
    Transport(String),
}

/// Status and raw body returned by the upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

pub struct UpstreamForwarder {
    client: Client,
    api_key: Option<String>,
    upstream_url: String,
    app_title: String,
}

impl UpstreamForwarder {
    pub fn new(config: &ProxyConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            upstream_url: config.upstream_url.clone(),
            app_title: config.app_title.clone(),
        }
    }

    /// Forward `body` upstream.
    ///
    /// The credential is checked before the body is even parsed; an empty
    /// body is treated as `{}`.
    pub async fn send(&self, body: &[u8], host: Option<&str>) -> Result<UpstreamReply, ForwardError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ForwardError::MissingCredential)?;

        let raw: &[u8] = if body.is_empty() { b"{}" } else { body };
        let request: ProxyRequest =
            serde_json::from_slice(raw).map_err(|e| ForwardError::InvalidBody(e.to_string()))?;

        let mut builder = self
            .client
            .post(&self.upstream_url)
            .bearer_auth(api_key)
            .header("X-Title", &self.app_title)
            .json(&request);

        if let Some(host) = host {
            builder = builder.header("HTTP-Referer", format!("https://{host}"));
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!("Upstream request failed: {}", e);
            ForwardError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ForwardError::Transport(e.to_string()))?;

        tracing::info!(
            "Forwarded completion for model {} -> {}",
            request.model.as_deref().unwrap_or("-"),
            status
        );

        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn forwarder(url: String, api_key: Option<&str>) -> UpstreamForwarder {
        UpstreamForwarder::new(&ProxyConfig {
            api_key: api_key.map(str::to_string),
            upstream_url: url,
            ..ProxyConfig::default()
        })
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", Matcher::Any).expect(0).create_async().await;

        let result = forwarder(server.url(), None).send(b"{}", None).await;

        assert!(matches!(result, Err(ForwardError::MissingCredential)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_null_temperature_is_forwarded() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat")
            .match_body(Matcher::Json(json!({
                "model": "m",
                "temperature": null
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let reply = forwarder(format!("{}/v1/chat", server.url()), Some("sk-or-server"))
            .send(br#"{"model":"m","temperature":null}"#, None)
            .await
            .unwrap();

        assert_eq!(reply.status, 200);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_injects_key_and_referer() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat")
            .match_header("authorization", "Bearer sk-or-server")
            .match_header("http-referer", "https://app.example.com")
            .match_body(Matcher::Json(json!({
                "model": "m",
                "messages": [{"role": "user", "content": "hi"}],
                "temperature": 0.7
            })))
            .with_status(201)
            .with_body("{\"ok\":true}")
            .create_async()
            .await;

        let reply = forwarder(format!("{}/v1/chat", server.url()), Some("sk-or-server"))
            .send(
                br#"{"model":"m","messages":[{"role":"user","content":"hi"}]}"#,
                Some("app.example.com"),
            )
            .await
            .unwrap();

        assert_eq!(
            reply,
            UpstreamReply {
                status: 201,
                body: "{\"ok\":true}".to_string()
            }
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let result = forwarder("http://127.0.0.1:1".to_string(), Some("k"))
            .send(b"{oops", None)
            .await;
        assert!(matches!(result, Err(ForwardError::InvalidBody(_))));
    }
}
