use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Request DTO for account registration
///
/// Missing keys decode as empty strings so they are reported by validation
/// rather than as malformed JSON.
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SignupRequestDto {
    /// At least 3 characters, stored lowercased
    #[serde(default)]
    pub username: String,

    /// Stored lowercased
    #[serde(default)]
    pub email: String,

    /// At least 8 characters, never stored in plaintext
    #[serde(default)]
    #[schema(format = Password)]
    pub password: String,
}

impl fmt::Debug for SignupRequestDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequestDto")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
