use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ResetRequest {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
    /// Unix time in milliseconds.
    pub timestamp: i64,
}
