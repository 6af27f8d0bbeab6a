//! Category catalog - the read model behind category listings and category pages.

use std::sync::Arc;

use futures::future::try_join_all;
use icu_collator::{Collator, CollatorOptions};

use crate::domain::{Category, EnrichedCategory, Locale, Slug};
use crate::error::RepoError;
use crate::ports::{CategoryRepository, PostRepository};

/// Read-only queries over categories, enriched with published post counts.
///
/// Holds no state of its own; every call reads through to the repositories.
#[derive(Clone)]
pub struct CategoryCatalog {
    categories: Arc<dyn CategoryRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CategoryCatalog {
    pub fn new(categories: Arc<dyn CategoryRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { categories, posts }
    }

    /// All categories of `locale`, sorted by name, each with its post count.
    ///
    /// An unknown locale yields an empty list.
    #[tracing::instrument(skip_all, fields(locale = %locale))]
    pub async fn list(&self, locale: &Locale) -> Result<Vec<EnrichedCategory>, RepoError> {
        let categories = self.categories.find_by_locale(locale).await?;

        let mut enriched =
            try_join_all(categories.into_iter().map(|category| self.enrich(category))).await?;

        sort_by_name(&mut enriched);

        tracing::debug!(count = enriched.len(), "Listed categories");
        Ok(enriched)
    }

    /// The category identified by `(slug, locale)` with its post count, or
    /// `None` when no such category exists.
    #[tracing::instrument(skip_all, fields(slug = %slug, locale = %locale))]
    pub async fn get_by_slug(
        &self,
        slug: &Slug,
        locale: &Locale,
    ) -> Result<Option<EnrichedCategory>, RepoError> {
        let Some(category) = self.categories.find_by_slug(slug, locale).await? else {
            tracing::debug!("Category not found");
            return Ok(None);
        };

        let enriched = self.enrich(category).await?;
        tracing::debug!(post_count = enriched.post_count, "Found category");
        Ok(Some(enriched))
    }

    async fn enrich(&self, category: Category) -> Result<EnrichedCategory, RepoError> {
        let post_count = self.posts.count_published_by_category(category.id).await?;
        Ok(EnrichedCategory::new(category, post_count))
    }
}

/// Orders categories by name under the Unicode root collation, which is what
/// both site locales use. Code-point order of name, then slug, breaks ties so
/// the order is total.
fn sort_by_name(categories: &mut [EnrichedCategory]) {
    let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => collator,
        Err(e) => {
            tracing::warn!("Collator unavailable, sorting by lowercased name: {}", e);
            categories.sort_by_cached_key(|item| {
                (item.category.name.to_lowercase(), item.category.slug.to_string())
            });
            return;
        }
    };

    categories.sort_by(|a, b| {
        collator
            .compare(&a.category.name, &b.category.name)
            .then_with(|| a.category.name.cmp(&b.category.name))
            .then_with(|| a.category.slug.as_str().cmp(b.category.slug.as_str()))
    });
}
