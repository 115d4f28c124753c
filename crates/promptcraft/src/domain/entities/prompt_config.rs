//! PromptConfig - Structured intent behind a prompt
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{OutputFormat, TargetModel, TaskType, Tone};

/// Minimum number of characters (after trimming) a goal needs before a
/// prompt may be generated.
pub const MIN_GOAL_CHARS: usize = 4;

/// PromptConfig - Everything the compiler needs to render a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub target_model: TargetModel,
    pub task_type: TaskType,
    pub user_goal: String,
    pub audience: String,
    pub tone: Tone,
    /// Word-count guidance, interpolated verbatim
    pub length: i64,
    pub constraints: String,
    pub must_include: String,
    pub avoid: String,
    pub output_format: OutputFormat,
    pub persona: String,
    pub few_shot_examples: String,
    pub languages: String,
    pub include_reasoning_steps: bool,
    pub include_guardrails: bool,
    pub include_process_steps: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            target_model: TargetModel::ChatGpt,
            task_type: TaskType::Writing,
            user_goal: String::new(),
            audience: String::new(),
            tone: Tone::Neutral,
            length: 600,
            constraints: String::new(),
            must_include: String::new(),
            avoid: String::new(),
            output_format: OutputFormat::Markdown,
            persona: String::new(),
            few_shot_examples: String::new(),
            languages: "English".to_string(),
            include_reasoning_steps: false,
            include_guardrails: true,
            include_process_steps: true,
        }
    }
}

impl PromptConfig {
    /// Whether the goal is long enough for a prompt to be generated
    pub fn can_generate(&self) -> bool {
        self.user_goal.trim().chars().count() >= MIN_GOAL_CHARS
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.user_goal = goal.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_generate_requires_more_than_three_chars() {
        assert!(!PromptConfig::default().can_generate());
        assert!(!PromptConfig::default().with_goal("abc").can_generate());
        assert!(!PromptConfig::default().with_goal("  ab   ").can_generate());
        assert!(PromptConfig::default().with_goal("abcd").can_generate());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PromptConfig =
            serde_json::from_str(r#"{"user_goal":"Write a haiku","tone":"playful"}"#).unwrap();

        assert_eq!(config.user_goal, "Write a haiku");
        assert_eq!(config.tone, Tone::Playful);
        assert_eq!(config.length, 600);
        assert_eq!(config.languages, "English");
        assert!(config.include_guardrails);
    }
}
