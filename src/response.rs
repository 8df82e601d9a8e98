use crate::{json, Result};
use serde::{Deserialize, Serialize};

/// API gateway style response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    /// Status 200, `body` encoded as e.g. `{"message": "hi"}`.
    pub fn ok<T: Serialize>(body: &T) -> Result<Self> {
        Ok(Self {
            status_code: 200,
            body: json::to_string(body)?,
        })
    }
}
