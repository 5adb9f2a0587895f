use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::users::handlers;
use crate::features::users::services::SignupService;

/// Create routes for the signup feature
pub fn routes(service: Arc<SignupService>) -> Router {
    Router::new()
        .route("/signup", post(handlers::signup))
        .with_state(service)
}
