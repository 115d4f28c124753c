//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (storage, chat-completion transports).
//!
//! Implementations of these traits live in adapter modules and the
//! proxy / CLI crates.

pub mod repositories;
pub mod services;

// Re-exports
pub use repositories::*;
pub use services::*;
