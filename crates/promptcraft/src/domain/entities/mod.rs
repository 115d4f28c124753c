//! Domain Entities
//!
//! - PromptConfig: Structured intent the compiler renders
//! - Template: Named preset wrapping a full PromptConfig
//! - DispatchSettings: Mode, model, temperature and credential
//! - ConversationTurn / ConversationLog: Display-ordered exchange

mod conversation;
mod dispatch_settings;
mod prompt_config;
mod template;

pub use conversation::*;
pub use dispatch_settings::*;
pub use prompt_config::*;
pub use template::*;
