//! Proxy configuration
//!
//! Read from Shuttle secrets with environment / `.env` fallback.

use promptcraft::{APP_TITLE, OPENROUTER_URL};

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const UPSTREAM_URL_VAR: &str = "OPENROUTER_URL";
pub const VARIANT_VAR: &str = "PROXY_VARIANT";

/// Deployment flavour of the proxy function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProxyVariant {
    /// JSON `{"error": ...}` bodies on failure
    #[default]
    Cloud,
    /// Plain-text bodies on failure, explicit CORS and content-type headers
    Platform,
}

impl std::fmt::Display for ProxyVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProxyVariant::Cloud => write!(f, "cloud"),
            ProxyVariant::Platform => write!(f, "platform"),
        }
    }
}

impl std::str::FromStr for ProxyVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cloud" | "vercel" => Ok(ProxyVariant::Cloud),
            "platform" | "netlify" => Ok(ProxyVariant::Platform),
            _ => Err(format!("Unknown proxy variant: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub api_key: Option<String>,
    pub upstream_url: String,
    pub app_title: String,
    pub variant: ProxyVariant,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            upstream_url: OPENROUTER_URL.to_string(),
            app_title: APP_TITLE.to_string(),
            variant: ProxyVariant::default(),
        }
    }
}

impl ProxyConfig {
    /// Build from any key lookup (secret store, environment, test map)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let variant = match lookup(VARIANT_VAR) {
            Some(raw) => raw.parse::<ProxyVariant>().unwrap_or_else(|e: String| {
                tracing::warn!("⚠️  {} - using {}", e, defaults.variant);
                defaults.variant
            }),
            None => defaults.variant,
        };

        Self {
            api_key: lookup(API_KEY_VAR).filter(|k| !k.trim().is_empty()),
            upstream_url: lookup(UPSTREAM_URL_VAR).unwrap_or(defaults.upstream_url),
            app_title: defaults.app_title,
            variant,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
