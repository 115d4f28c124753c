//! DispatchSettings - Where and how compiled prompts are sent

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::services::DEFAULT_MODEL_ID;
use crate::domain::value_objects::DispatchMode;

/// Temperature used when a stored or typed value cannot be parsed
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Dispatch settings persisted by the settings store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
    pub mode: DispatchMode,
    pub model: String,
    #[serde(deserialize_with = "lenient_temperature")]
    pub temperature: f32,
    /// Only required in direct mode
    #[serde(alias = "openrouterKey")]
    pub api_key: String,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            mode: DispatchMode::Direct,
            model: DEFAULT_MODEL_ID.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: String::new(),
        }
    }
}

impl DispatchSettings {
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Normalize a temperature into `[0, 1]`; non-finite values become the default.
pub fn normalize_temperature(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        DEFAULT_TEMPERATURE
    }
}

/// Parse user input into a temperature, falling back to the default.
pub fn parse_temperature(input: &str) -> f32 {
    input
        .trim()
        .parse::<f32>()
        .map(normalize_temperature)
        .unwrap_or(DEFAULT_TEMPERATURE)
}

/// Accepts a number or a numeric string; anything else yields the default.
fn lenient_temperature<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let temperature = match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(|v| normalize_temperature(v as f32))
            .unwrap_or(DEFAULT_TEMPERATURE),
        serde_json::Value::String(s) => parse_temperature(&s),
        _ => DEFAULT_TEMPERATURE,
    };
    Ok(temperature)
}

/// Partial update applied by [`crate::SettingsStore::set`]
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub mode: Option<DispatchMode>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub api_key: Option<String>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.mode.is_none()
            && self.model.is_none()
            && self.temperature.is_none()
            && self.api_key.is_none()
    }

    /// Apply onto existing settings
    pub fn apply(self, settings: &mut DispatchSettings) {
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(model) = self.model {
            settings.model = model;
        }
        if let Some(temperature) = self.temperature {
            settings.temperature = normalize_temperature(temperature);
        }
        if let Some(api_key) = self.api_key {
            settings.api_key = api_key;
        }
    }
}
