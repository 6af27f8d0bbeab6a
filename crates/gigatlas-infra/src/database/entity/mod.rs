//! SeaORM entities for the catalog tables.

pub mod category;
pub mod post;
