//! Generic API response shapes shared across endpoints.

use serde::{Deserialize, Serialize};

/// Standard error response body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Field-level validation error: `{"field": "...", "message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Detail response used by the maintenance gate: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailDto {
    pub detail: String,
}

/// Simple acknowledgement body: `{"status": "ok"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusDto {
    pub status: String,
}

impl StatusDto {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
