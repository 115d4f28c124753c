//! DispatchMode - How a compiled prompt reaches the model

use serde::{Deserialize, Serialize};

/// Dispatch mode
///
/// `Direct` calls the upstream API with the user's own key; `Proxied` goes
/// through the same-origin proxy which holds the key server side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    #[default]
    #[serde(alias = "personal")]
    Direct,
    #[serde(alias = "server")]
    Proxied,
}

impl std::fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchMode::Direct => write!(f, "direct"),
            DispatchMode::Proxied => write!(f, "proxied"),
        }
    }
}

impl std::str::FromStr for DispatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" | "personal" => Ok(DispatchMode::Direct),
            "proxied" | "proxy" | "server" => Ok(DispatchMode::Proxied),
            _ => Err(format!("Unknown dispatch mode: {}", s)),
        }
    }
}
