//! Tone - Voice of the requested output

use serde::{Deserialize, Serialize};

/// Tone of voice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Friendly,
    Professional,
    Persuasive,
    Academic,
    Playful,
    Concise,
}

impl Tone {
    pub const ALL: [Tone; 7] = [
        Tone::Neutral,
        Tone::Friendly,
        Tone::Professional,
        Tone::Persuasive,
        Tone::Academic,
        Tone::Playful,
        Tone::Concise,
    ];
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Neutral => write!(f, "neutral"),
            Tone::Friendly => write!(f, "friendly"),
            Tone::Professional => write!(f, "professional"),
            Tone::Persuasive => write!(f, "persuasive"),
            Tone::Academic => write!(f, "academic"),
            Tone::Playful => write!(f, "playful"),
            Tone::Concise => write!(f, "concise"),
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neutral" => Ok(Tone::Neutral),
            "friendly" => Ok(Tone::Friendly),
            "professional" => Ok(Tone::Professional),
            "persuasive" => Ok(Tone::Persuasive),
            "academic" => Ok(Tone::Academic),
            "playful" => Ok(Tone::Playful),
            "concise" => Ok(Tone::Concise),
            _ => Err(format!("Unknown tone: {}", s)),
        }
    }
}
