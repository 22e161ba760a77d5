//! Shared API types: the result envelope and error mapping

pub mod error;
pub mod json;

use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiErrorBody};
pub use json::Json;

/// Success envelope: `{success: true, data}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Confirmation envelope for deletes: `{success: true, message}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
