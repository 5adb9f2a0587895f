use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::{classify_insert_error, StoreError};
use crate::features::contact::models::{Contact, NewContact};

/// Persistence seam for contact submissions (append-only)
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert_contact(&self, contact: &NewContact) -> Result<Contact, StoreError>;
}

/// PostgreSQL-backed contact store
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn insert_contact(&self, contact: &NewContact) -> Result<Contact, StoreError> {
        sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (email, reason)
            VALUES ($1, $2)
            RETURNING id, email, reason, created_at
            "#,
        )
        .bind(&contact.email)
        .bind(&contact.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(classify_insert_error)
    }
}
