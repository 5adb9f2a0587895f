// =============================================================================
// SIGNUP RULES
// =============================================================================

/// Minimum username length in characters
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length in characters
pub const MIN_PASSWORD_LEN: usize = 8;

// =============================================================================
// CONTACT RULES
// =============================================================================

/// Minimum contact reason length in characters (inclusive)
pub const MIN_REASON_LEN: usize = 10;

/// Maximum contact reason length in characters (inclusive)
pub const MAX_REASON_LEN: usize = 2000;
