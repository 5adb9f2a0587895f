use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::users::dtos::SignupRequestDto;
use crate::features::users::services::SignupService;
use crate::features::users::validation::validate_registration;
use crate::shared::types::{ErrorResponse, MessageResponse};

pub const SIGNUP_SUCCESS_MESSAGE: &str = "User created successfully";

/// Register a new account
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequestDto,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Invalid JSON, missing fields, or too-short username/password", body = ErrorResponse),
        (status = 409, description = "Username or email already exists", body = ErrorResponse),
        (status = 500, description = "Hashing or database failure", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn signup(
    State(service): State<Arc<SignupService>>,
    AppJson(dto): AppJson<SignupRequestDto>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    validate_registration(&dto)?;

    service.register(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(SIGNUP_SUCCESS_MESSAGE)),
    ))
}
