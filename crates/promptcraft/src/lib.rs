//! Promptcraft Domain Library
//!
//! Core types and services for building prompts from structured intent and
//! sending them to an OpenRouter-compatible chat-completion endpoint.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: PromptConfig, Template, DispatchSettings, ConversationLog
//!   - `value_objects/`: TargetModel, TaskType, Tone, OutputFormat, DispatchMode, Theme
//!   - `services/`: Prompt compiler, template registry, model catalog
//!   - `errors`: DomainError, DispatchError
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits) and wire types
//!   - `repositories/`: KeyValueStore
//!   - `services/`: Chat-completion bodies, ProxyAdapter
//!
//! - **Application** (`application/`): SettingsStore, Session
//! - **Services** (`services/`): RequestDispatcher (reqwest)
//! - **Adapters** (`adapters/`): MemoryKeyValueStore
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptcraft::{compile, find_template};
//!
//! let template = find_template("blog-post").unwrap();
//! println!("{}", compile(&template.config));
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use adapters::MemoryKeyValueStore;
pub use application::{PendingTurn, Session, SettingsStore, SETTINGS_KEY, THEME_KEY};
pub use domain::{
    compile, find_model, find_template, list_models, list_templates, normalize_temperature,
    parse_temperature, ConversationLog, ConversationTurn, DispatchError, DispatchMode,
    DispatchSettings, DomainError, ModelOption, OutputFormat, PromptConfig, SettingsPatch,
    TargetModel, TaskType, Template, Theme, Tone, TurnRole, TurnStatus, DEFAULT_MODEL_ID,
    DEFAULT_TEMPERATURE,
};
pub use ports::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, KeyValueStore, MessageRole,
    ProxyAdapter, ProxyResponse,
};
pub use services::dispatcher::{
    DispatcherConfig, RequestDispatcher, APP_TITLE, BODY_EXCERPT_CHARS, DEFAULT_MAX_TOKENS,
    OPENROUTER_URL, PROXY_PATH,
};
