use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Shallow `local@domain.tld` shape check, no deliverability or RFC 5322 rules.
    /// Only ASCII whitespace (space, `\t`, `\n`, `\f`, `\r`) is rejected inside a part.
    /// - Valid: "john@example.com", "a.b+c@mail.co.id"
    /// - Invalid: "john", "john@example", "jo hn@example.com", "a@b@c.com"
    pub static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\t\n\f\r @]+@[^\t\n\f\r @]+\.[^\t\n\f\r @]+$").unwrap();
}

/// First rule a request violated. Display text is the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username, email, and password are required")]
    SignupFieldsRequired,

    #[error("Username must be at least {min} characters")]
    UsernameTooShort { min: usize },

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Email and reason are required")]
    ContactFieldsRequired,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Please provide more details (at least {min} characters)")]
    ReasonTooShort { min: usize },

    #[error("Message too long (max {max} characters)")]
    ReasonTooLong { max: usize },
}

impl ValidationError {
    /// Name of the offending field(s)
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::SignupFieldsRequired => "username,email,password",
            ValidationError::UsernameTooShort { .. } => "username",
            ValidationError::PasswordTooShort { .. } => "password",
            ValidationError::ContactFieldsRequired => "email,reason",
            ValidationError::InvalidEmailFormat => "email",
            ValidationError::ReasonTooShort { .. } | ValidationError::ReasonTooLong { .. } => {
                "reason"
            }
        }
    }
}

/// Length in characters rather than bytes
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_regex_valid() {
        assert!(EMAIL_REGEX.is_match("john@example.com"));
        assert!(EMAIL_REGEX.is_match("a.b+c@mail.co.id"));
        assert!(EMAIL_REGEX.is_match("x@y.z"));
    }

    #[test]
    fn test_email_regex_invalid() {
        assert!(!EMAIL_REGEX.is_match("john")); // no at sign
        assert!(!EMAIL_REGEX.is_match("john@example")); // no dot in domain
        assert!(!EMAIL_REGEX.is_match("jo hn@example.com")); // whitespace
        assert!(!EMAIL_REGEX.is_match("a@b@c.com")); // two at signs
        assert!(!EMAIL_REGEX.is_match("@example.com")); // empty local part
        assert!(!EMAIL_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_email_regex_whitespace_is_ascii_only() {
        for email in ["a\tb@example.com", "a@exa\nmple.com", "a@example.c\rom", "a\x0cb@x.io"] {
            assert!(!EMAIL_REGEX.is_match(email), "{email:?}");
        }
        // Unicode spaces are ordinary characters here
        assert!(EMAIL_REGEX.is_match("a\u{a0}b@example.com"));
        assert!(EMAIL_REGEX.is_match("a@exa\u{2003}mple.com"));
    }

    #[test]
    fn test_messages_match_responses() {
        assert_eq!(
            ValidationError::UsernameTooShort { min: 3 }.to_string(),
            "Username must be at least 3 characters"
        );
        assert_eq!(
            ValidationError::ReasonTooLong { max: 2000 }.to_string(),
            "Message too long (max 2000 characters)"
        );
        assert_eq!(
            ValidationError::ReasonTooShort { min: 10 }.to_string(),
            "Please provide more details (at least 10 characters)"
        );
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("ñandú"), 5);
    }
}
