//! Service Ports
//!
//! Wire types and interfaces for the chat-completion endpoint and the proxy.

mod chat_completion;
mod proxy;

pub use chat_completion::*;
pub use proxy::*;
