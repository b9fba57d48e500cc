//! Wire types exchanged with the admissions backend

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/admissions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionPayload {
    pub full_name: String,
    pub father_name: String,
    pub class_grade: String,
}

/// Success body returned by the backend.
///
/// Every field is optional: a 2xx is a success whatever the body says.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AdmissionReceipt {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    /// The stored record, echoed back
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl AdmissionReceipt {
    /// Parse a success body, falling back to an empty receipt
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Extract the human-readable `detail` message from a non-2xx body.
///
/// The body must be JSON. `detail` counts only when it is a non-empty
/// string; request validation failures carry a list there instead.
pub fn error_detail(body: &[u8]) -> Result<Option<String>, serde_json::Error> {
    let parsed: serde_json::Value = serde_json::from_slice(body)?;
    Ok(parsed
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string))
}
