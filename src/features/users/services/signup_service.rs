use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::SignupRequestDto;
use crate::features::users::models::NewUser;
use crate::features::users::repositories::UserStore;
use crate::modules::hashing::CredentialHasher;

/// Client-facing message for non-duplicate store failures
const CREATE_USER_FAILED: &str = "Failed to create user";

/// Service for registering accounts
pub struct SignupService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
}

impl SignupService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { store, hasher }
    }

    /// Hash the password and store the account. Expects a validated request.
    pub async fn register(&self, dto: SignupRequestDto) -> Result<()> {
        let SignupRequestDto {
            username,
            email,
            password,
        } = dto;

        let password_hash = self.hash_password(password).await?;

        let new_user = NewUser {
            username: username.to_lowercase(),
            email: email.to_lowercase(),
            password_hash,
        };

        let user = self
            .store
            .insert_user(&new_user)
            .await
            .map_err(|e| AppError::from_store(CREATE_USER_FAILED, e))?;

        tracing::info!("User created: id={}, username={}", user.id, user.username);

        Ok(())
    }

    /// Run the hasher on the blocking pool so slow hashes don't stall the runtime
    async fn hash_password(&self, password: String) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Hashing(format!("hashing task did not complete: {}", e)))?
            .map_err(|e| AppError::Hashing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::UniqueField;
    use crate::shared::test_helpers::{
        cheap_hasher, FailingHasher, FailingUserStore, InMemoryUserStore,
    };
    use argon2::{Argon2, PasswordHash, PasswordVerifier};

    fn dto(username: &str, email: &str, password: &str) -> SignupRequestDto {
        SignupRequestDto {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_lowercased_identity_and_hash() {
        let store = Arc::new(InMemoryUserStore::default());
        let service = SignupService::new(store.clone(), Arc::new(cheap_hasher()));

        service
            .register(dto("Alice", "Alice@Example.COM", "password123"))
            .await
            .unwrap();

        let users = store.users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].email, "alice@example.com");
        assert_ne!(users[0].password_hash, "password123");

        let parsed = PasswordHash::new(&users[0].password_hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"password123", &parsed)
            .is_ok());
    }

    #[tokio::test]
    async fn test_register_reports_duplicates() {
        let store = Arc::new(InMemoryUserStore::default());
        let service = SignupService::new(store.clone(), Arc::new(cheap_hasher()));

        service
            .register(dto("alice", "alice@example.com", "password123"))
            .await
            .unwrap();

        let err = service
            .register(dto("ALICE", "other@example.com", "password123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate(UniqueField::Username)));

        let err = service
            .register(dto("bob", "alice@EXAMPLE.com", "password123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate(UniqueField::Email)));
    }

    #[tokio::test]
    async fn test_hashing_failure_skips_persistence() {
        let store = Arc::new(InMemoryUserStore::default());
        let service = SignupService::new(store.clone(), Arc::new(FailingHasher));

        let err = service
            .register(dto("alice", "alice@example.com", "password123"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Hashing(_)));
        assert!(!err.to_string().contains("password123"));
        assert_eq!(store.attempts(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_is_persistence_error() {
        let service = SignupService::new(Arc::new(FailingUserStore), Arc::new(cheap_hasher()));

        let err = service
            .register(dto("alice", "alice@example.com", "password123"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Persistence {
                message: "Failed to create user",
                ..
            }
        ));
    }
}
