use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for the contact form
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ContactRequestDto {
    /// Reply address; trimmed and lowercased before validation
    #[serde(default)]
    pub email: String,

    /// Message body; trimmed, 10-2000 characters
    #[serde(default)]
    pub reason: String,
}
