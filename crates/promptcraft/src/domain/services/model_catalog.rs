//! Model Catalog - OpenRouter models offered for selection

use serde::Serialize;

pub const DEFAULT_MODEL_ID: &str = "mistralai/mistral-small-3.2-24b-instruct:free";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ModelOption {
    pub id: &'static str,
    pub label: &'static str,
}

const MODELS: [ModelOption; 3] = [
    ModelOption {
        id: DEFAULT_MODEL_ID,
        label: "Mistral Small 3.2 24B (free)",
    },
    ModelOption {
        id: "openai/gpt-oss-20b:free",
        label: "OpenAI GPT-OSS 20B (free)",
    },
    ModelOption {
        id: "deepseek/deepseek-r1-0528:free",
        label: "DeepSeek R1 0528 (free)",
    },
];

/// Selectable models; the first entry is the default
pub fn list_models() -> &'static [ModelOption] {
    &MODELS
}

pub fn find_model(id: &str) -> Option<&'static ModelOption> {
    MODELS.iter().find(|m| m.id == id)
}
