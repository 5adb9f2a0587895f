use crate::features::users::dtos::SignupRequestDto;
use crate::shared::constants::{MIN_PASSWORD_LEN, MIN_USERNAME_LEN};
use crate::shared::validation::{char_len, ValidationError};

/// Check a signup request, reporting only the first rule it breaks.
///
/// Order: all fields present, username length, password length.
pub fn validate_registration(dto: &SignupRequestDto) -> Result<(), ValidationError> {
    if dto.username.is_empty() || dto.email.is_empty() || dto.password.is_empty() {
        return Err(ValidationError::SignupFieldsRequired);
    }

    if char_len(&dto.username) < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort {
            min: MIN_USERNAME_LEN,
        });
    }

    if char_len(&dto.password) < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}
