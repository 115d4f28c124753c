//! Cloud-function flavour
//!
//! Failures are JSON `{"error": "..."}` with status 500; upstream replies are
//! relayed with a JSON content type.

use async_trait::async_trait;

use promptcraft::{ProxyAdapter, ProxyResponse};

use super::UpstreamForwarder;
use crate::models::ErrorBody;

pub struct CloudFunctionAdapter {
    forwarder: UpstreamForwarder,
}

impl CloudFunctionAdapter {
    pub fn new(forwarder: UpstreamForwarder) -> Self {
        Self { forwarder }
    }

    fn error(status: u16, message: impl Into<String>) -> ProxyResponse {
        let body = serde_json::to_string(&ErrorBody {
            error: message.into(),
        })
        .unwrap_or_else(|_| "{\"error\":\"internal error\"}".to_string());
        ProxyResponse::new(status, body).with_header("content-type", "application/json")
    }
}

#[async_trait]
impl ProxyAdapter for CloudFunctionAdapter {
    async fn forward(&self, body: &[u8], host: Option<&str>) -> ProxyResponse {
        match self.forwarder.send(body, host).await {
            Ok(reply) => ProxyResponse::new(reply.status, reply.body)
                .with_header("content-type", "application/json"),
            Err(e) => Self::error(500, e.to_string()),
        }
    }

    fn method_not_allowed(&self) -> ProxyResponse {
        Self::error(405, "Method not allowed")
    }

    fn variant_name(&self) -> &str {
        "cloud"
    }
}
