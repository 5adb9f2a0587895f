use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Column guarded by a UNIQUE constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Username => f.write_str("username"),
            UniqueField::Email => f.write_str("email"),
        }
    }
}

/// Outcome of a failed insert, as seen by the services
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated on {0}")]
    Duplicate(UniqueField),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Classify a failed insert into a duplicate or a plain database error.
///
/// Unique violations (SQLSTATE 23505) are attributed to a column by the
/// constraint name first and the error message second. When neither names
/// the username column the violation is reported against email.
pub fn classify_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::Duplicate(duplicate_field(db_err.constraint(), db_err.message()));
        }
    }

    StoreError::Database(err)
}

pub fn duplicate_field(constraint: Option<&str>, message: &str) -> UniqueField {
    let mentions_username = |text: &str| text.to_ascii_lowercase().contains("username");

    match constraint {
        Some(name) if mentions_username(name) => UniqueField::Username,
        _ if mentions_username(message) => UniqueField::Username,
        _ => UniqueField::Email,
    }
}
