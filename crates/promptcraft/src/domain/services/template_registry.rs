//! Template Registry
//!
//! Fixed catalog of presets. Built once on first access and never mutated.

use std::sync::OnceLock;

use crate::domain::entities::{PromptConfig, Template};
use crate::domain::value_objects::{OutputFormat, TargetModel, TaskType, Tone};

static TEMPLATES: OnceLock<Vec<Template>> = OnceLock::new();

/// All presets, in display order
pub fn list_templates() -> &'static [Template] {
    TEMPLATES.get_or_init(build_templates)
}

/// Look up a preset by id
pub fn find_template(id: &str) -> Option<&'static Template> {
    list_templates().iter().find(|t| t.id == id)
}

fn build_templates() -> Vec<Template> {
    vec![
        Template {
            id: "blog-post",
            display_name: "Blog post",
            hint: "Long-form article with headings for a general audience",
            config: PromptConfig {
                target_model: TargetModel::ChatGpt,
                task_type: TaskType::Writing,
                user_goal: "Write a blog post explaining how to start composting at home"
                    .to_string(),
                audience: "beginners living in apartments".to_string(),
                tone: Tone::Friendly,
                length: 900,
                must_include: "a short checklist at the end".to_string(),
                avoid: "technical soil chemistry".to_string(),
                output_format: OutputFormat::Markdown,
                ..PromptConfig::default()
            },
        },
        Template {
            id: "code-review",
            display_name: "Code review",
            hint: "Structured review of a code snippet with prioritized findings",
            config: PromptConfig {
                target_model: TargetModel::Claude,
                task_type: TaskType::Coding,
                user_goal: "Review the following function for bugs, readability and performance"
                    .to_string(),
                audience: "a mid-level developer".to_string(),
                tone: Tone::Professional,
                length: 400,
                constraints: "Order findings by severity".to_string(),
                output_format: OutputFormat::BulletList,
                persona: "a senior software engineer".to_string(),
                include_reasoning_steps: true,
                ..PromptConfig::default()
            },
        },
        Template {
            id: "marketing-email",
            display_name: "Marketing email",
            hint: "Short persuasive email with a subject line and call to action",
            config: PromptConfig {
                target_model: TargetModel::ChatGpt,
                task_type: TaskType::Marketing,
                user_goal: "Draft a launch email for our new project management app".to_string(),
                audience: "small business owners".to_string(),
                tone: Tone::Persuasive,
                length: 200,
                must_include: "a subject line and one clear call to action".to_string(),
                avoid: "exaggerated claims".to_string(),
                output_format: OutputFormat::PlainText,
                persona: "an experienced email marketer".to_string(),
                include_process_steps: false,
                ..PromptConfig::default()
            },
        },
        Template {
            id: "lesson-plan",
            display_name: "Lesson plan",
            hint: "Classroom-ready lesson with objectives and activities",
            config: PromptConfig {
                target_model: TargetModel::Gemini,
                task_type: TaskType::Education,
                user_goal: "Create a 45-minute lesson plan introducing photosynthesis"
                    .to_string(),
                audience: "students aged 12 to 13".to_string(),
                tone: Tone::Friendly,
                length: 700,
                constraints: "Include learning objectives, activities and an exit question"
                    .to_string(),
                output_format: OutputFormat::Markdown,
                persona: "an experienced science teacher".to_string(),
                ..PromptConfig::default()
            },
        },
        Template {
            id: "data-analysis",
            display_name: "Data analysis",
            hint: "Interpret a dataset summary and return structured insights",
            config: PromptConfig {
                target_model: TargetModel::DeepSeek,
                task_type: TaskType::Analysis,
                user_goal: "Analyze the quarterly sales figures below and identify the main trends"
                    .to_string(),
                audience: "the executive team".to_string(),
                tone: Tone::Professional,
                length: 500,
                must_include: "three actionable recommendations".to_string(),
                output_format: OutputFormat::Table,
                include_reasoning_steps: true,
                ..PromptConfig::default()
            },
        },
        Template {
            id: "research-summary",
            display_name: "Research summary",
            hint: "Condense a paper or article into key findings",
            config: PromptConfig {
                target_model: TargetModel::Mistral,
                task_type: TaskType::Summarization,
                user_goal: "Summarize the key findings and limitations of the attached paper"
                    .to_string(),
                audience: "non-specialist readers".to_string(),
                tone: Tone::Academic,
                length: 300,
                avoid: "speculation beyond the paper's claims".to_string(),
                output_format: OutputFormat::BulletList,
                few_shot_examples: "- Finding: ...\n- Evidence: ...\n- Limitation: ...".to_string(),
                include_process_steps: false,
                ..PromptConfig::default()
            },
        },
    ]
}
