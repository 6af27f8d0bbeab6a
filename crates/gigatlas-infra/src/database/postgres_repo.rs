//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};
use uuid::Uuid;

use gigatlas_core::domain::{Category, Locale, PostStatus, Slug};
use gigatlas_core::error::RepoError;
use gigatlas_core::ports::{CategoryRepository, PostRepository};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::post::{self, Entity as PostEntity};

fn repo_error(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

/// PostgreSQL category repository.
pub struct PostgresCategoryRepository {
    db: DbConn,
}

impl PostgresCategoryRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_locale(&self, locale: &Locale) -> Result<Vec<Category>, RepoError> {
        tracing::debug!(locale = %locale, "Finding categories by locale");

        let models = CategoryEntity::find()
            .filter(category::Column::Locale.eq(locale.as_str()))
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        models.into_iter().map(Category::try_from).collect()
    }

    async fn find_by_slug(
        &self,
        slug: &Slug,
        locale: &Locale,
    ) -> Result<Option<Category>, RepoError> {
        tracing::debug!(slug = %slug, locale = %locale, "Finding category by slug");

        // Two rows are enough to detect a broken (slug, locale) index.
        let mut models = CategoryEntity::find()
            .filter(category::Column::Slug.eq(slug.as_str()))
            .filter(category::Column::Locale.eq(locale.as_str()))
            .limit(2)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        if models.len() > 1 {
            tracing::error!(slug = %slug, locale = %locale, "Duplicate category key");
            return Err(RepoError::Integrity(format!(
                "multiple categories for slug '{slug}' and locale '{locale}'"
            )));
        }

        models.pop().map(Category::try_from).transpose()
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn count_published_by_category(&self, category_id: Uuid) -> Result<u64, RepoError> {
        PostEntity::find()
            .filter(post::Column::CategoryId.eq(category_id))
            .filter(post::Column::Status.eq(PostStatus::Published.as_str()))
            .count(&self.db)
            .await
            .map_err(repo_error)
    }
}
