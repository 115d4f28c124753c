//! Domain Errors
//!
//! Error types for domain operations and request dispatch.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

/// Terminal outcome of a single failed dispatch.
///
/// None of these invalidate configuration, settings or earlier turns; the
/// message is rendered into the assistant turn that was pending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Missing OpenRouter API key in Settings.")]
    MissingCredential,

    #[error("OpenRouter error {status}: {body_excerpt}")]
    Upstream { status: u16, body_excerpt: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response from OpenRouter: {0}")]
    InvalidResponse(String),
}
