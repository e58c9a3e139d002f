//! Response body shared by every command-style endpoint.

use serde::Serialize;

/// `{"detail": "<message>"}`
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
