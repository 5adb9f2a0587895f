//! In-memory stand-ins for the persistence and hashing seams

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::core::config::HashingConfig;
use crate::core::database::{StoreError, UniqueField};
use crate::features::contact::models::{Contact, NewContact};
use crate::features::contact::repositories::ContactStore;
use crate::features::users::models::{NewUser, User};
use crate::features::users::repositories::UserStore;
use crate::modules::hashing::{Argon2Hasher, CredentialHasher, HashError};

/// Argon2id with the smallest work factor, to keep tests fast
pub fn cheap_hasher() -> Argon2Hasher {
    Argon2Hasher::new(HashingConfig {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .expect("cheap hashing params are valid")
}

pub struct FailingHasher;

impl CredentialHasher for FailingHasher {
    fn hash(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::Backend("hasher unavailable".to_string()))
    }
}

/// Enforces the same UNIQUE(username) and UNIQUE(email) constraints as the
/// `users` table
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<NewUser>>,
    attempts: AtomicUsize,
}

impl InMemoryUserStore {
    /// Rows as they were handed to the store, hash included
    pub fn users(&self) -> Vec<NewUser> {
        self.users.lock().unwrap().clone()
    }

    /// Number of insert calls, successful or not
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert_user(&self, user: &NewUser) -> Result<User, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Duplicate(UniqueField::Username));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(UniqueField::Email));
        }

        users.push(user.clone());
        Ok(User {
            id: Uuid::now_v7(),
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: Utc::now(),
        })
    }
}

pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn insert_user(&self, _user: &NewUser) -> Result<User, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[derive(Default)]
pub struct InMemoryContactStore {
    contacts: Mutex<Vec<NewContact>>,
    attempts: AtomicUsize,
}

impl InMemoryContactStore {
    pub fn contacts(&self) -> Vec<NewContact> {
        self.contacts.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn insert_contact(&self, contact: &NewContact) -> Result<Contact, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.contacts.lock().unwrap().push(contact.clone());

        Ok(Contact {
            id: Uuid::now_v7(),
            email: contact.email.clone(),
            reason: contact.reason.clone(),
            created_at: Utc::now(),
        })
    }
}

pub struct FailingContactStore;

#[async_trait]
impl ContactStore for FailingContactStore {
    async fn insert_contact(&self, _contact: &NewContact) -> Result<Contact, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}
