use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::{classify_insert_error, StoreError};
use crate::features::users::models::{NewUser, User};

const INSERT_USER: &str = r#"
    INSERT INTO users (username, email, password_hash)
    VALUES ($1, $2, $3)
    RETURNING id, username, email, created_at
"#;

/// Persistence seam for accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert exactly one account. Uniqueness of username and email is left
    /// to the store; a violation comes back as `StoreError::Duplicate`.
    async fn insert_user(&self, user: &NewUser) -> Result<User, StoreError>;
}

/// PostgreSQL-backed account store
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert_user(&self, user: &NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(INSERT_USER)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(classify_insert_error)
    }
}
