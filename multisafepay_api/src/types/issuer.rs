use serde::{Deserialize, Serialize};

/// A bank or provider that can be selected for a direct payment through a gateway.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Issuer {
    pub code: String,
    #[serde(default)]
    pub description: String,
}
