//! Platform-function flavour
//!
//! Failures are plain text with status 500. Relayed replies carry an explicit
//! JSON content type and a wildcard CORS origin.

use async_trait::async_trait;

use promptcraft::{ProxyAdapter, ProxyResponse};

use super::UpstreamForwarder;

pub struct PlatformFunctionAdapter {
    forwarder: UpstreamForwarder,
}

impl PlatformFunctionAdapter {
    pub fn new(forwarder: UpstreamForwarder) -> Self {
        Self { forwarder }
    }
}

#[async_trait]
impl ProxyAdapter for PlatformFunctionAdapter {
    async fn forward(&self, body: &[u8], host: Option<&str>) -> ProxyResponse {
        match self.forwarder.send(body, host).await {
            Ok(reply) => ProxyResponse::new(reply.status, reply.body)
                .with_header("content-type", "application/json")
                .with_header("access-control-allow-origin", "*"),
            Err(e) => ProxyResponse::new(500, e.to_string())
                .with_header("content-type", "text/plain; charset=utf-8"),
        }
    }

    fn method_not_allowed(&self) -> ProxyResponse {
        ProxyResponse::new(405, "Method not allowed")
            .with_header("content-type", "text/plain; charset=utf-8")
    }

    fn variant_name(&self) -> &str {
        "platform"
    }
}
