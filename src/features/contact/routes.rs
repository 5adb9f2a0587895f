use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::contact::handlers;
use crate::features::contact::services::ContactService;

/// Create routes for the contact feature
///
/// Note: This feature is public (no authentication required) as it backs
/// the contact form.
pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/contact", post(handlers::submit_contact))
        .with_state(service)
}
