//! Features layer - one module per HTTP surface
//!
//! Each feature owns its DTOs, handlers, models, persistence and routes.

pub mod contact;
pub mod health;
pub mod users;
