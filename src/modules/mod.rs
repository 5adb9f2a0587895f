//! Modules layer - Infrastructure components shared by features
//!
//! Contains adapters for CPU-bound or external concerns such as password hashing.

pub mod hashing;
