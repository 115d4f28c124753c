//! Proxy Routes
//!
//! - /api/openrouter - Chat-completion forwarding
//! - /api-docs/openapi.json - OpenAPI document

pub mod openrouter;
pub mod swagger;
