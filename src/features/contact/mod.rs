//! Contact form feature.
//!
//! Public endpoint that normalizes and validates a support request and appends
//! it to the `contacts` table.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/contact` | No | Submit a contact request |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validation;

pub use repositories::PgContactStore;
pub use services::ContactService;
