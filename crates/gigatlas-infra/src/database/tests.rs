use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr, Value};
use uuid::Uuid;

use gigatlas_core::domain::{Locale, Slug};
use gigatlas_core::error::RepoError;
use gigatlas_core::ports::{CategoryRepository, PostRepository};

use super::entity::category;
use super::postgres_repo::{PostgresCategoryRepository, PostgresPostRepository};

fn category_model(slug: &str, locale: &str, name: &str) -> category::Model {
    let now = Utc::now();
    category::Model {
        id: Uuid::new_v4(),
        slug: slug.to_owned(),
        locale: locale.to_owned(),
        name: name.to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(count)))])
}

#[tokio::test]
async fn test_find_category_by_slug() {
    let model = category_model("design", "en", "Design");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);
    let found = repo
        .find_by_slug(&Slug::new("design").unwrap(), &Locale::new("en").unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.id, model.id);
    assert_eq!(found.name, "Design");
    assert_eq!(found.locale.as_str(), "en");
}

#[tokio::test]
async fn test_find_category_by_slug_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<category::Model>::new()])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);
    let found = repo
        .find_by_slug(&Slug::new("nonexistent").unwrap(), &Locale::new("en").unwrap())
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_duplicate_slug_is_integrity_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            category_model("design", "en", "Design"),
            category_model("design", "en", "Design (copy)"),
        ]])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);
    let err = repo
        .find_by_slug(&Slug::new("design").unwrap(), &Locale::new("en").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Integrity(_)));
}

#[tokio::test]
async fn test_find_categories_by_locale() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            category_model("seo", "nl", "SEO"),
            category_model("ontwerp", "nl", "Ontwerp"),
        ]])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);
    let found = repo
        .find_by_locale(&Locale::new("nl").unwrap())
        .await
        .unwrap();

    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn test_blank_stored_locale_is_integrity_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![category_model("design", " ", "Design")]])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);
    let err = repo
        .find_by_locale(&Locale::new("en").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Integrity(_)));
}

#[tokio::test]
async fn test_count_published_posts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(4)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let count = repo
        .count_published_by_category(Uuid::new_v4())
        .await
        .unwrap();

    assert_eq!(count, 4);
}

#[tokio::test]
async fn test_connection_failure_maps_to_connection_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
            "connection reset".to_owned(),
        ))])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo
        .count_published_by_category(Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Connection(_)));
}
