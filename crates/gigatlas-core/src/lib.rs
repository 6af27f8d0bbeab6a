//! # Gigatlas Core
//!
//! The domain layer of the Gigatlas content site.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod ports;

pub use catalog::CategoryCatalog;
pub use error::{DomainError, RepoError};
