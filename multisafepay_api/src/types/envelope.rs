use serde::{Deserialize, Serialize};

/// Wrapper around every HTTP 200 response body: `{"success": bool, "data": ...}`.
///
/// `data` is kept undecoded until `success` has been checked.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}
