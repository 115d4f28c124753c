//! TargetModel - The assistant family a prompt is written for

use serde::{Deserialize, Serialize};

/// Model family the compiled prompt addresses.
///
/// Unknown values deserialize to [`TargetModel::Other`] so that configs written
/// by newer front ends still compile, using the generic role line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetModel {
    #[default]
    ChatGpt,
    Claude,
    Gemini,
    Llama,
    Mistral,
    DeepSeek,
    #[serde(other)]
    Other,
}

impl TargetModel {
    pub const ALL: [TargetModel; 6] = [
        TargetModel::ChatGpt,
        TargetModel::Claude,
        TargetModel::Gemini,
        TargetModel::Llama,
        TargetModel::Mistral,
        TargetModel::DeepSeek,
    ];

    /// Role line opening the prompt
    pub fn role_line(&self) -> &'static str {
        match self {
            TargetModel::ChatGpt => {
                "You are ChatGPT, an expert assistant who follows instructions precisely."
            }
            TargetModel::Claude => {
                "You are Claude, an expert assistant who writes carefully and honestly."
            }
            TargetModel::Gemini => {
                "You are Gemini, an expert assistant who is thorough and well organized."
            }
            TargetModel::Llama => "You are Llama, an expert assistant who answers directly.",
            TargetModel::Mistral => "You are Mistral, an expert assistant who is concise and exact.",
            TargetModel::DeepSeek => {
                "You are DeepSeek, an expert assistant with strong analytical skills."
            }
            TargetModel::Other => "You are an expert assistant.",
        }
    }
}

impl std::fmt::Display for TargetModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetModel::ChatGpt => write!(f, "chatgpt"),
            TargetModel::Claude => write!(f, "claude"),
            TargetModel::Gemini => write!(f, "gemini"),
            TargetModel::Llama => write!(f, "llama"),
            TargetModel::Mistral => write!(f, "mistral"),
            TargetModel::DeepSeek => write!(f, "deepseek"),
            TargetModel::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for TargetModel {
    type Err = String;

    /// Never fails: unrecognized names map to [`TargetModel::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "chatgpt" => TargetModel::ChatGpt,
            "claude" => TargetModel::Claude,
            "gemini" => TargetModel::Gemini,
            "llama" => TargetModel::Llama,
            "mistral" => TargetModel::Mistral,
            "deepseek" => TargetModel::DeepSeek,
            _ => TargetModel::Other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_deserializes_to_other() {
        let model: TargetModel = serde_json::from_str("\"grok\"").unwrap();
        assert_eq!(model, TargetModel::Other);
        assert_eq!(model.role_line(), "You are an expert assistant.");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Claude".parse::<TargetModel>(), Ok(TargetModel::Claude));
        assert_eq!("something".parse::<TargetModel>(), Ok(TargetModel::Other));
    }
}
