//! Session - Single owner of the mutable state of a front end
//!
//! Holds the active prompt configuration, the settings store and the
//! conversation log. Rendering and compilation borrow from it; nothing else
//! keeps shared mutable state.
//!
//! Sending a prompt is a two-phase log mutation: [`Session::begin_turn`]
//! appends the user turn plus a placeholder and hands back the placeholder's
//! slot, [`Session::complete_turn`] replaces exactly that slot. Overlapping
//! dispatches therefore never clobber each other's placeholders.

use crate::domain::{
    compile, find_template, ConversationLog, ConversationTurn, DispatchError, DomainError,
    PromptConfig, MIN_GOAL_CHARS,
};
use crate::ports::KeyValueStore;
use crate::services::RequestDispatcher;

use super::SettingsStore;

/// Handle to a placeholder turn awaiting its reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTurn {
    index: usize,
}

impl PendingTurn {
    pub fn index(&self) -> usize {
        self.index
    }
}

pub struct Session<S: KeyValueStore> {
    config: PromptConfig,
    settings: SettingsStore<S>,
    log: ConversationLog,
    compiled: Option<String>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(settings: SettingsStore<S>) -> Self {
        Self {
            config: PromptConfig::default(),
            settings,
            log: ConversationLog::new(),
            compiled: None,
        }
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PromptConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: PromptConfig) {
        self.config = config;
    }

    /// Replace the active configuration with a registry preset
    pub fn apply_template(&mut self, id: &str) -> Result<&PromptConfig, DomainError> {
        let template = find_template(id).ok_or_else(|| DomainError::not_found("Template", id))?;
        self.config = template.config.clone();
        tracing::debug!("Applied template {}", template.id);
        Ok(&self.config)
    }

    /// Compile the active configuration, provided its goal is long enough
    pub fn generate_prompt(&mut self) -> Result<&str, DomainError> {
        if !self.config.can_generate() {
            return Err(DomainError::Validation(format!(
                "Goal must be at least {MIN_GOAL_CHARS} characters"
            )));
        }

        let prompt = compile(&self.config);
        tracing::info!(
            "Generated {} prompt ({} chars)",
            self.config.task_type,
            prompt.len()
        );
        Ok(self.compiled.insert(prompt).as_str())
    }

    /// Most recently generated prompt
    pub fn compiled_prompt(&self) -> Option<&str> {
        self.compiled.as_deref()
    }

    /// Append the user turn and an assistant placeholder
    pub fn begin_turn(&mut self, prompt: impl Into<String>) -> PendingTurn {
        self.log.append(ConversationTurn::user(prompt));
        let index = self.log.append(ConversationTurn::placeholder());
        PendingTurn { index }
    }

    /// Replace the placeholder reserved by `pending` with the outcome.
    ///
    /// Returns `None` when `pending` does not point into this log.
    pub fn complete_turn(
        &mut self,
        pending: PendingTurn,
        result: Result<String, DispatchError>,
    ) -> Option<&ConversationTurn> {
        let turn = match result {
            Ok(text) => ConversationTurn::assistant(text),
            Err(e) => {
                tracing::warn!("Dispatch failed: {}", e);
                ConversationTurn::failed(e)
            }
        };
        if !self.log.replace_at(pending.index, turn) {
            tracing::warn!("No turn at index {} to complete", pending.index);
            return None;
        }
        self.log.all().get(pending.index)
    }

    /// Send the last generated prompt with the stored settings, compiling
    /// the active configuration first if nothing was generated yet.
    ///
    /// Dispatch failures are not errors here: they end up as an
    /// error-tagged assistant turn. Only a goal that is too short is rejected.
    pub async fn run(
        &mut self,
        dispatcher: &RequestDispatcher,
    ) -> Result<&ConversationTurn, DomainError> {
        let prompt = match self.compiled.clone() {
            Some(prompt) => prompt,
            None => self.generate_prompt()?.to_string(),
        };

        let pending = self.begin_turn(prompt.clone());
        let settings = self.settings.get().clone();
        let result = dispatcher.dispatch(&prompt, &settings).await;

        let index = pending.index;
        self.complete_turn(pending, result)
            .ok_or_else(|| DomainError::not_found("Turn", &index.to_string()))
    }

    pub fn settings(&self) -> &SettingsStore<S> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore<S> {
        &mut self.settings
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }
}
