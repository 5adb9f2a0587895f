use crate::features::contact::dtos::ContactRequestDto;
use crate::features::contact::models::NewContact;
use crate::shared::constants::{MAX_REASON_LEN, MIN_REASON_LEN};
use crate::shared::validation::{char_len, ValidationError, EMAIL_REGEX};

/// Normalize and check a contact request, reporting only the first rule it
/// breaks.
///
/// Email is trimmed and lowercased, reason is trimmed. Order: both present,
/// email shape, reason length (short before long, bounds inclusive).
pub fn validate_contact(dto: &ContactRequestDto) -> Result<NewContact, ValidationError> {
    let email = dto.email.trim().to_lowercase();
    let reason = dto.reason.trim();

    if email.is_empty() || reason.is_empty() {
        return Err(ValidationError::ContactFieldsRequired);
    }

    if !EMAIL_REGEX.is_match(&email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    let reason_len = char_len(reason);
    if reason_len < MIN_REASON_LEN {
        return Err(ValidationError::ReasonTooShort {
            min: MIN_REASON_LEN,
        });
    }
    if reason_len > MAX_REASON_LEN {
        return Err(ValidationError::ReasonTooLong {
            max: MAX_REASON_LEN,
        });
    }

    Ok(NewContact {
        email,
        reason: reason.to_string(),
    })
}
