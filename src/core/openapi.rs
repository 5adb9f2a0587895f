use utoipa::{Modify, OpenApi};

use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::health;
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Signup (public)
        users_handlers::signup,
        // Contact (public)
        contact_handlers::submit_contact,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            MessageResponse,
            health::HealthResponse,
            // Signup
            users_dtos::SignupRequestDto,
            // Contact
            contact_dtos::ContactRequestDto,
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "users", description = "Account registration (public)"),
        (name = "contact", description = "Contact form submissions (public)"),
    ),
    info(
        title = "KatanaID API",
        version = "0.1.0",
        description = "Signup and contact API for KatanaID",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
