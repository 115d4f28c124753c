//! Template - Named preset for the prompt form

use serde::Serialize;

use super::PromptConfig;

/// A registry entry. `config` is complete and replaces the active
/// configuration as a whole when applied.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub display_name: &'static str,
    pub hint: &'static str,
    pub config: PromptConfig,
}
