use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Locale, Slug};
use crate::error::RepoError;

/// Read access to the `categories` collection.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories whose locale matches exactly, in no particular order.
    async fn find_by_locale(&self, locale: &Locale) -> Result<Vec<Category>, RepoError>;

    /// The category identified by `(slug, locale)`.
    ///
    /// Returns [`RepoError::Integrity`] if the store holds more than one match.
    async fn find_by_slug(&self, slug: &Slug, locale: &Locale)
    -> Result<Option<Category>, RepoError>;
}

/// Read access to the `posts` collection.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Number of published posts referencing `category_id`.
    async fn count_published_by_category(&self, category_id: Uuid) -> Result<u64, RepoError>;
}
