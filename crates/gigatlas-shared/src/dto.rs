//! Data Transfer Objects - response types for the catalog API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gigatlas_core::domain::EnrichedCategory;

/// A category as rendered by listing and category pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub slug: String,
    pub locale: String,
    pub name: String,
    #[serde(rename = "postCount")]
    pub post_count: u64,
}

impl From<EnrichedCategory> for CategoryResponse {
    fn from(enriched: EnrichedCategory) -> Self {
        let category = enriched.category;
        Self {
            id: category.id,
            slug: category.slug.into(),
            locale: category.locale.into(),
            name: category.name,
            post_count: enriched.post_count,
        }
    }
}
