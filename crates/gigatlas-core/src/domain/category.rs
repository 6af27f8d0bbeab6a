use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Locale;
use crate::error::DomainError;

/// URL-safe identifier of a category within one locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".to_string()));
        }
        if value.trim() != value {
            return Err(DomainError::Validation(format!(
                "slug '{value}' has surrounding whitespace"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

/// Category entity - a locale-scoped group of posts.
///
/// `(slug, locale)` is unique across all categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub slug: Slug,
    pub locale: Locale,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category with generated ID and timestamps.
    pub fn new(slug: Slug, locale: Locale, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug,
            locale,
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A category together with the number of its published posts.
///
/// Computed on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedCategory {
    #[serde(flatten)]
    pub category: Category,
    #[serde(rename = "postCount")]
    pub post_count: u64,
}

impl EnrichedCategory {
    pub fn new(category: Category, post_count: u64) -> Self {
        Self {
            category,
            post_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_new() {
        let category = Category::new(
            Slug::new("web-design").unwrap(),
            Locale::new("en").unwrap(),
            "Web Design",
        );

        assert_eq!(category.slug.as_str(), "web-design");
        assert_eq!(category.locale.as_str(), "en");
        assert_eq!(category.name, "Web Design");
        assert_eq!(category.created_at, category.updated_at);
    }

    #[test]
    fn test_blank_slug_is_rejected() {
        assert!(matches!(Slug::new(" "), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_padded_slug_is_rejected() {
        assert!(matches!(Slug::new(" design "), Err(DomainError::Validation(_))));
        assert_eq!(Slug::new("design").unwrap().as_str(), "design");
    }

    #[test]
    fn test_enriched_category_serializes_flat() {
        let category = Category::new(
            Slug::new("seo").unwrap(),
            Locale::new("en").unwrap(),
            "SEO",
        );
        let id = category.id;
        let value = serde_json::to_value(EnrichedCategory::new(category, 3)).unwrap();

        assert_eq!(value["_id"], id.to_string());
        assert_eq!(value["slug"], "seo");
        assert_eq!(value["name"], "SEO");
        assert_eq!(value["postCount"], 3);
    }
}
