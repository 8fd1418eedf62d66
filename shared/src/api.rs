use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::IntegrationType;

// ============================================================================
// Load Endpoint
// ============================================================================

/// Multipart field carrying the JSON-serialized credentials.
pub const CREDENTIALS_FIELD: &str = "credentials";

/// Path of the load endpoint for an integration, relative to the API base.
pub fn load_path(integration: IntegrationType) -> String {
    format!("/integrations/{}/load", integration.path_segment())
}

/// Error body returned by the backend on a failed load.
///
/// `detail` is usually a message string; validation failures may carry a
/// structured value instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl LoadErrorResponse {
    /// Human-readable message, if the server provided one.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
