//! TaskType - Kind of work the prompt asks for

use serde::{Deserialize, Serialize};

/// Task category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    #[default]
    Writing,
    Coding,
    Analysis,
    Research,
    Marketing,
    Education,
    Summarization,
}

impl TaskType {
    pub const ALL: [TaskType; 7] = [
        TaskType::Writing,
        TaskType::Coding,
        TaskType::Analysis,
        TaskType::Research,
        TaskType::Marketing,
        TaskType::Education,
        TaskType::Summarization,
    ];

    /// Human readable label used inside the compiled prompt
    pub fn label(&self) -> &'static str {
        match self {
            TaskType::Writing => "writing",
            TaskType::Coding => "coding",
            TaskType::Analysis => "analysis",
            TaskType::Research => "research",
            TaskType::Marketing => "marketing",
            TaskType::Education => "education",
            TaskType::Summarization => "summarization",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "writing" => Ok(TaskType::Writing),
            "coding" => Ok(TaskType::Coding),
            "analysis" => Ok(TaskType::Analysis),
            "research" => Ok(TaskType::Research),
            "marketing" => Ok(TaskType::Marketing),
            "education" => Ok(TaskType::Education),
            "summarization" => Ok(TaskType::Summarization),
            _ => Err(format!("Unknown task type: {}", s)),
        }
    }
}
