//! Contact Service - append-only storage of contact submissions

use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::contact::models::NewContact;
use crate::features::contact::repositories::ContactStore;

const SUBMIT_CONTACT_FAILED: &str = "Failed to submit contact";

/// Service for storing contact form submissions
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Store a normalized submission
    pub async fn submit(&self, contact: NewContact) -> Result<()> {
        let stored = self
            .store
            .insert_contact(&contact)
            .await
            .map_err(|e| AppError::from_store(SUBMIT_CONTACT_FAILED, e))?;

        tracing::info!(
            "New contact submission: id={}, email={}",
            stored.id,
            stored.email
        );

        Ok(())
    }
}
