//! # Gigatlas Infrastructure
//!
//! Concrete implementations of the ports defined in `gigatlas-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM
//! - without default features - in-memory repositories only

pub mod database;

pub use database::{DatabaseConfig, InMemoryCategoryRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresCategoryRepository, PostgresPostRepository};
