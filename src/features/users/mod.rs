//! Account registration feature.
//!
//! Validates signup input, hashes the password with Argon2id and stores the
//! account with lowercased username and email.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/signup` | No | Register a new account |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validation;

pub use repositories::PgUserStore;
pub use services::SignupService;
