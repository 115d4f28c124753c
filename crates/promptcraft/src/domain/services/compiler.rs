//! Prompt Compiler
//!
//! Renders a [`PromptConfig`] into the final prompt text. The function is
//! pure and total: equal configs always produce byte-identical output and
//! no input makes it fail.

use crate::domain::entities::PromptConfig;

pub const PERSONA_LABEL: &str = "Persona:";
pub const AUDIENCE_LABEL: &str = "Audience:";
pub const LANGUAGE_LABEL: &str = "Language:";
pub const CONSTRAINTS_LABEL: &str = "Constraints:";
pub const MUST_INCLUDE_LABEL: &str = "Must include:";
pub const AVOID_LABEL: &str = "Avoid:";
pub const EXAMPLES_LABEL: &str = "Examples:";

pub const GUARDRAILS_LINE: &str =
    "Guardrails: Do not invent facts or sources; say so plainly when you are unsure.";

pub const REASONING_SHOWN: &str =
    "Think through the problem step by step and show your reasoning before the final answer.";
pub const REASONING_HIDDEN: &str =
    "Do not reveal your internal reasoning; give only the final answer.";

pub const PROCESS_DIRECTIVE: &str = "Follow this process:
1. Restate the goal and identify what the audience needs.
2. Outline the structure of the response.
3. Write the complete response.
4. Review it against the constraints and refine it before answering.";

/// Compile a configuration into a prompt string.
///
/// Sections are separated by one blank line and always appear in the same
/// order: role, task, constraints, output format, reasoning clause, process
/// directive, examples. Empty free-text fields produce no line at all.
pub fn compile(config: &PromptConfig) -> String {
    let mut sections: Vec<String> = Vec::with_capacity(7);

    sections.push(role_section(config));
    sections.push(task_section(config));

    if let Some(constraints) = constraints_section(config) {
        sections.push(constraints);
    }

    sections.push(format!("Output format: {}", config.output_format.directive()));

    sections.push(
        if config.include_reasoning_steps {
            REASONING_SHOWN
        } else {
            REASONING_HIDDEN
        }
        .to_string(),
    );

    if config.include_process_steps {
        sections.push(PROCESS_DIRECTIVE.to_string());
    }

    if let Some(examples) = non_empty(&config.few_shot_examples) {
        sections.push(format!("{EXAMPLES_LABEL}\n{examples}"));
    }

    sections.join("\n\n")
}

fn role_section(config: &PromptConfig) -> String {
    let mut lines = vec![config.target_model.role_line().to_string()];
    push_labeled(&mut lines, PERSONA_LABEL, &config.persona);
    lines.join("\n")
}

fn task_section(config: &PromptConfig) -> String {
    let mut lines = vec![format!(
        "Task ({}): {}",
        config.task_type.label(),
        config.user_goal.trim()
    )];
    push_labeled(&mut lines, AUDIENCE_LABEL, &config.audience);
    lines.push(format!("Tone: {}", config.tone));
    push_labeled(&mut lines, LANGUAGE_LABEL, &config.languages);
    lines.push(format!(
        "Length: aim for approximately {} words.",
        config.length
    ));
    lines.join("\n")
}

fn constraints_section(config: &PromptConfig) -> Option<String> {
    let mut lines = Vec::new();
    push_labeled(&mut lines, CONSTRAINTS_LABEL, &config.constraints);
    push_labeled(&mut lines, MUST_INCLUDE_LABEL, &config.must_include);
    push_labeled(&mut lines, AVOID_LABEL, &config.avoid);
    if config.include_guardrails {
        lines.push(GUARDRAILS_LINE.to_string());
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn push_labeled(lines: &mut Vec<String>, label: &str, value: &str) {
    if let Some(value) = non_empty(value) {
        lines.push(format!("{label} {value}"));
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
