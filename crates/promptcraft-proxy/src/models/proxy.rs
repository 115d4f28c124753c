//! Request and response bodies of the proxy endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_TEMPERATURE: f64 = 0.7;

fn default_temperature() -> Option<f64> {
    Some(DEFAULT_TEMPERATURE)
}

/// Chat-completion body accepted by the proxy and forwarded upstream.
///
/// Fields are forwarded as received; only a missing temperature is filled in.
/// An explicit `null` temperature is passed through as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProxyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub messages: Option<serde_json::Value>,
    #[serde(default = "default_temperature")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Error body of the cloud-function variant
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
    pub version: String,
    pub variant: String,
}
