//! Prompt form input
//!
//! Builds a [`PromptConfig`] from a template, an optional TOML file and
//! per-field flags, applied in that order.

use anyhow::{bail, Context, Result};
use clap::Args;
use std::fmt::Display;
use std::fs;

use promptcraft::{find_template, OutputFormat, PromptConfig, TargetModel, TaskType, Tone};

#[derive(Args, Debug, Default, Clone)]
pub struct PromptArgs {
    /// Start from a template (see `promptcraft templates`)
    #[arg(short, long)]
    pub template: Option<String>,
    /// Load the form from a TOML file
    #[arg(long)]
    pub config: Option<String>,
    /// What the prompt should accomplish
    #[arg(short, long)]
    pub goal: Option<String>,
    #[arg(long, help = choices_help("Target model family", &TargetModel::ALL))]
    pub target: Option<TargetModel>,
    #[arg(long, help = choices_help("Kind of task", &TaskType::ALL))]
    pub task: Option<TaskType>,
    #[arg(long)]
    pub audience: Option<String>,
    #[arg(long, help = choices_help("Tone of the answer", &Tone::ALL))]
    pub tone: Option<Tone>,
    /// Desired length in words
    #[arg(long)]
    pub length: Option<i64>,
    #[arg(long)]
    pub constraints: Option<String>,
    #[arg(long)]
    pub must_include: Option<String>,
    #[arg(long)]
    pub avoid: Option<String>,
    #[arg(short, long, help = choices_help("Output format", &OutputFormat::ALL))]
    pub format: Option<OutputFormat>,
    #[arg(long)]
    pub persona: Option<String>,
    /// Few-shot examples, inline
    #[arg(long, conflicts_with = "examples_file")]
    pub examples: Option<String>,
    /// Few-shot examples, read from a file
    #[arg(long)]
    pub examples_file: Option<String>,
    #[arg(long)]
    pub languages: Option<String>,
    /// Ask the model to show its reasoning
    #[arg(long)]
    pub reasoning: bool,
    #[arg(long)]
    pub no_guardrails: bool,
    /// Drop the step-by-step process directive
    #[arg(long)]
    pub no_steps: bool,
}

/// "Label (a, b, c)" built from an enum's variants
fn choices_help<T: Display>(label: &str, values: &[T]) -> String {
    let names: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("{} ({})", label, names.join(", "))
}

impl PromptArgs {
    pub fn build(&self) -> Result<PromptConfig> {
        let mut config = match (&self.template, &self.config) {
            (Some(_), Some(_)) => bail!("Use either --template or --config, not both"),
            (Some(id), None) => match find_template(id) {
                Some(template) => template.config.clone(),
                None => bail!("Unknown template: {}", id),
            },
            (None, Some(path)) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse prompt form {}", path))?
            }
            (None, None) => PromptConfig::default(),
        };

        if let Some(goal) = &self.goal {
            config.user_goal = goal.clone();
        }
        if let Some(target) = self.target {
            config.target_model = target;
        }
        if let Some(task) = self.task {
            config.task_type = task;
        }
        if let Some(audience) = &self.audience {
            config.audience = audience.clone();
        }
        if let Some(tone) = self.tone {
            config.tone = tone;
        }
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(constraints) = &self.constraints {
            config.constraints = constraints.clone();
        }
        if let Some(must_include) = &self.must_include {
            config.must_include = must_include.clone();
        }
        if let Some(avoid) = &self.avoid {
            config.avoid = avoid.clone();
        }
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if let Some(persona) = &self.persona {
            config.persona = persona.clone();
        }
        if let Some(examples) = &self.examples {
            config.few_shot_examples = examples.clone();
        }
        if let Some(path) = &self.examples_file {
            config.few_shot_examples =
                fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        }
        if let Some(languages) = &self.languages {
            config.languages = languages.clone();
        }
        if self.reasoning {
            config.include_reasoning_steps = true;
        }
        if self.no_guardrails {
            config.include_guardrails = false;
        }
        if self.no_steps {
            config.include_process_steps = false;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_template() {
        let args = PromptArgs {
            template: Some("code-review".to_string()),
            goal: Some("Review the parser module".to_string()),
            tone: Some(Tone::Friendly),
            no_steps: true,
            ..Default::default()
        };
        let config = args.build().unwrap();
        let template = find_template("code-review").unwrap();

        assert_eq!(config.user_goal, "Review the parser module");
        assert_eq!(config.tone, Tone::Friendly);
        assert!(!config.include_process_steps);
        assert_eq!(config.task_type, template.config.task_type);
    }

    #[test]
    fn test_choices_help_lists_every_variant() {
        let help = choices_help("Output format", &OutputFormat::ALL);
        assert!(help.starts_with("Output format ("));
        for format in OutputFormat::ALL {
            assert!(help.contains(&format.to_string()));
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
        assert_eq!(
            choices_help("Tone", &Tone::ALL).matches(", ").count(),
            Tone::ALL.len() - 1
        );
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        let args = PromptArgs {
            template: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(args.build().is_err());
    }

    #[test]
    fn test_partial_toml_form() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"user_goal = \"Explain borrowing\"\ntarget_model = \"claude\"\ntone = \"academic\"\n",
        )
        .unwrap();

        let args = PromptArgs {
            config: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        let config = args.build().unwrap();

        assert_eq!(config.user_goal, "Explain borrowing");
        assert_eq!(config.target_model, TargetModel::Claude);
        assert_eq!(config.tone, Tone::Academic);
        assert_eq!(config.length, PromptConfig::default().length);
    }
}
