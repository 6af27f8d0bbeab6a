//! # Gigatlas Shared
//!
//! Wire types shared between the API server and the site renderer.

pub mod dto;
pub mod response;

pub use dto::CategoryResponse;
pub use response::{ApiResponse, ErrorResponse};
