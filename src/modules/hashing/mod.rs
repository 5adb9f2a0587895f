//! Password hashing module
//!
//! Provides the credential hashing seam used by signup and its Argon2id
//! implementation.

mod argon2_hasher;

pub use argon2_hasher::{Argon2Hasher, CredentialHasher, HashError};
