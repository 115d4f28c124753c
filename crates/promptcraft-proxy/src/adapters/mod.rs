//! Infrastructure Adapters
//!
//! Implementations of the `ProxyAdapter` port, one per hosting target, on top
//! of a shared upstream forwarder.

pub mod cloud_function;
pub mod forwarder;
pub mod platform_function;

// Re-exports
pub use cloud_function::CloudFunctionAdapter;
pub use forwarder::{ForwardError, UpstreamForwarder, UpstreamReply};
pub use platform_function::PlatformFunctionAdapter;

use std::sync::Arc;

use promptcraft::ProxyAdapter;

use crate::config::{ProxyConfig, ProxyVariant};

/// Pick the adapter for the configured deployment target
pub fn build_adapter(config: &ProxyConfig) -> Arc<dyn ProxyAdapter> {
    let forwarder = UpstreamForwarder::new(config);
    match config.variant {
        ProxyVariant::Cloud => Arc::new(CloudFunctionAdapter::new(forwarder)),
        ProxyVariant::Platform => Arc::new(PlatformFunctionAdapter::new(forwarder)),
    }
}
