//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use gigatlas_core::domain::{Category, Locale, Post, Slug};
use gigatlas_core::error::RepoError;
use gigatlas_core::ports::{CategoryRepository, PostRepository};

/// Categories held in a HashMap keyed by id behind an async RwLock.
pub struct InMemoryCategoryRepository {
    store: RwLock<HashMap<Uuid, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Store a category, enforcing the unique `(slug, locale)` key.
    ///
    /// Re-inserting a category with the same id replaces it.
    pub async fn insert(&self, category: Category) -> Result<(), RepoError> {
        let mut store = self.store.write().await;

        let taken = store.values().any(|existing| {
            existing.id != category.id
                && existing.slug == category.slug
                && existing.locale == category.locale
        });
        if taken {
            return Err(RepoError::Constraint(format!(
                "category '{}' already exists for locale '{}'",
                category.slug, category.locale
            )));
        }

        store.insert(category.id, category);
        Ok(())
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_locale(&self, locale: &Locale) -> Result<Vec<Category>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .filter(|category| &category.locale == locale)
            .cloned()
            .collect())
    }

    async fn find_by_slug(
        &self,
        slug: &Slug,
        locale: &Locale,
    ) -> Result<Option<Category>, RepoError> {
        let store = self.store.read().await;
        let mut matches = store
            .values()
            .filter(|category| &category.slug == slug && &category.locale == locale);

        let found = matches.next().cloned();
        if matches.next().is_some() {
            return Err(RepoError::Integrity(format!(
                "multiple categories for slug '{slug}' and locale '{locale}'"
            )));
        }
        Ok(found)
    }
}

/// Posts held in a Vec behind an async RwLock.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    /// Store a post, replacing any post with the same id.
    pub async fn insert(&self, post: Post) {
        let mut store = self.store.write().await;
        store.retain(|existing| existing.id != post.id);
        store.push(post);
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn count_published_by_category(&self, category_id: Uuid) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        let count = store
            .iter()
            .filter(|post| post.category_id == Some(category_id) && post.is_published())
            .count();
        Ok(count as u64)
    }
}
