//! Observability module - request IDs.

mod request_id;

pub use request_id::{RequestId, propagate_request_id};
