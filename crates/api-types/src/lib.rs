//! Shared request/response types used by API-facing crates.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
}

impl HealthCheckResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Convenience alias for handlers that prefer a shorter type name.
pub type HealthResponse = HealthCheckResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body of `POST /api/auth/run-code`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCodeRequest {
    #[serde(default)]
    pub source_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_language_id")]
    pub language_id: Option<u32>,
    #[serde(default)]
    pub stdin: Option<String>,
}

impl RunCodeRequest {
    pub const MISSING_FIELDS: &'static str = "Source code and language ID are required";

    /// Returns `(source_code, language_id, stdin)` when the required fields are present.
    pub fn required_fields(&self) -> Option<(&str, u32, &str)> {
        let source_code = self
            .source_code
            .as_deref()
            .filter(|code| !code.trim().is_empty())?;
        let language_id = self.language_id.filter(|id| *id != 0)?;
        Some((source_code, language_id, self.stdin.as_deref().unwrap_or_default()))
    }
}

/// Form fields arrive as strings, so `"71"` reads the same as `71`.
/// Anything that is not a `u32` reads as absent.
fn lenient_language_id<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_u64().and_then(|id| u32::try_from(id).ok()),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

/// Judge outcome flattened next to a `success` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunCodeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: Map<String, Value>,
}

impl RunCodeResponse {
    pub fn new(success: bool, result: Value) -> Self {
        let result = match result {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("result".to_string(), other);
                map
            }
        };
        Self { success, result }
    }
}
