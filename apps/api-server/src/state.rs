//! Application state - shared across all handlers.

use std::sync::Arc;

use gigatlas_core::CategoryCatalog;
use gigatlas_core::domain::Locale;
use gigatlas_core::error::DomainError;
use gigatlas_infra::{InMemoryCategoryRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use gigatlas_infra::{DatabaseConnections, PostgresCategoryRepository, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CategoryCatalog,
    pub default_locale: Locale,
    /// Name of the backing store, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        if let Some(db_config) = &config.database {
            match DatabaseConnections::init(db_config).await {
                Ok(connections) => {
                    let catalog = CategoryCatalog::new(
                        Arc::new(PostgresCategoryRepository::new(connections.main.clone())),
                        Arc::new(PostgresPostRepository::new(connections.main)),
                    );
                    tracing::info!("Application state initialized");
                    return Self::with_catalog(catalog, config.default_locale.clone(), "postgres");
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory repositories");

        Self::in_memory(
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
            config.default_locale.clone(),
        )
    }

    /// State backed by in-memory repositories.
    pub fn in_memory(
        categories: Arc<InMemoryCategoryRepository>,
        posts: Arc<InMemoryPostRepository>,
        default_locale: Locale,
    ) -> Self {
        Self::with_catalog(
            CategoryCatalog::new(categories, posts),
            default_locale,
            "memory",
        )
    }

    fn with_catalog(catalog: CategoryCatalog, default_locale: Locale, storage: &'static str) -> Self {
        Self {
            catalog,
            default_locale,
            storage,
        }
    }

    /// The requested locale, or the configured default when none was given.
    pub fn resolve_locale(&self, requested: Option<&str>) -> Result<Locale, DomainError> {
        match requested {
            Some(value) => Locale::new(value),
            None => Ok(self.default_locale.clone()),
        }
    }
}
