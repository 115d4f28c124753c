//! Proxy Adapter Port
//!
//! One interface for every hosting target of the forwarding proxy. Each
//! deployment flavour (JSON-erroring cloud function, plain-text platform
//! function) implements [`ProxyAdapter`]; the forwarding logic itself is
//! shared.

use async_trait::async_trait;

/// HTTP-shaped result of a forward. Header names are lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ProxyResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into().to_lowercase(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Forwarding proxy interface
///
/// `forward` is total: missing credentials, malformed bodies and transport
/// failures are all rendered as HTTP 500 responses in the adapter's own
/// error style.
#[async_trait]
pub trait ProxyAdapter: Send + Sync {
    /// Forward a raw chat-completion request body.
    ///
    /// `host` is the incoming request's Host header, used to build the
    /// referer sent upstream.
    async fn forward(&self, body: &[u8], host: Option<&str>) -> ProxyResponse;

    /// Body returned for non-POST requests (status 405)
    fn method_not_allowed(&self) -> ProxyResponse;

    /// Deployment flavour name, for logs
    fn variant_name(&self) -> &str;
}
