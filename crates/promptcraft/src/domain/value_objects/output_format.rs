//! OutputFormat - Shape of the response the prompt asks for

use serde::{Deserialize, Serialize};

/// Requested output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Markdown,
    PlainText,
    Json,
    BulletList,
    Table,
    Code,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Markdown,
        OutputFormat::PlainText,
        OutputFormat::Json,
        OutputFormat::BulletList,
        OutputFormat::Table,
        OutputFormat::Code,
    ];

    /// Directive sentence rendered in the output-format section
    pub fn directive(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "Respond in Markdown with clear headings and short paragraphs.",
            OutputFormat::PlainText => "Respond in plain text without any Markdown formatting.",
            OutputFormat::Json => "Respond with a single valid JSON object and nothing else.",
            OutputFormat::BulletList => "Respond as a concise bulleted list.",
            OutputFormat::Table => "Respond with a Markdown table followed by a one-line summary.",
            OutputFormat::Code => {
                "Respond with code in fenced code blocks and brief explanations between them."
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::PlainText => write!(f, "plain_text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::BulletList => write!(f, "bullet_list"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Code => write!(f, "code"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "plain_text" | "text" | "plain" => Ok(OutputFormat::PlainText),
            "json" => Ok(OutputFormat::Json),
            "bullet_list" | "bullets" => Ok(OutputFormat::BulletList),
            "table" => Ok(OutputFormat::Table),
            "code" => Ok(OutputFormat::Code),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_aliases() {
        assert_eq!("plain-text".parse(), Ok(OutputFormat::PlainText));
        assert_eq!("md".parse(), Ok(OutputFormat::Markdown));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
