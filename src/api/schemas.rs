// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Failure envelope shared by every endpoint
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Human-readable error message
    #[schema(example = "Project not found")]
    pub error: String,

    /// Error code for programmatic handling
    #[schema(example = "PROJECT_NOT_FOUND")]
    pub code: String,
}
