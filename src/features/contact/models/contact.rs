use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a contact submission
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Contact {
    pub id: Uuid,
    pub email: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

/// Normalized, validated submission ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub email: String,
    pub reason: String,
}
