use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::contact::dtos::ContactRequestDto;
use crate::features::contact::services::ContactService;
use crate::features::contact::validation::validate_contact;
use crate::shared::types::{ErrorResponse, MessageResponse};

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for contacting us! We'll get back to you soon.";

/// Submit a contact request
///
/// This is a public endpoint (no authentication required).
#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactRequestDto,
    responses(
        (status = 201, description = "Contact request stored", body = MessageResponse),
        (status = 400, description = "Invalid JSON, missing fields, bad email, or reason length out of range", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    ),
    tag = "contact"
)]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<ContactRequestDto>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let contact = validate_contact(&dto)?;

    service.submit(contact).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(CONTACT_SUCCESS_MESSAGE)),
    ))
}
