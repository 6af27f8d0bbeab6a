//! Category catalog endpoints.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use gigatlas_core::domain::Slug;
use gigatlas_core::error::DomainError;
use gigatlas_shared::{ApiResponse, CategoryResponse};

use crate::middleware::error::{AppResult, HandlerResult};
use crate::observability::RequestId;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

/// GET /api/categories?locale=en
pub async fn list_categories(
    state: web::Data<AppState>,
    request_id: RequestId,
    query: web::Query<LocaleQuery>,
) -> HandlerResult<HttpResponse> {
    render_list(&state, query.into_inner())
        .await
        .map_err(|e| e.for_request(request_id))
}

/// GET /api/categories/{slug}?locale=en
pub async fn get_category(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    query: web::Query<LocaleQuery>,
) -> HandlerResult<HttpResponse> {
    render_category(&state, path.into_inner(), query.into_inner())
        .await
        .map_err(|e| e.for_request(request_id))
}

async fn render_list(state: &AppState, query: LocaleQuery) -> AppResult<HttpResponse> {
    let locale = state.resolve_locale(query.locale.as_deref())?;

    let categories = state.catalog.list(&locale).await?;
    let body: Vec<CategoryResponse> = categories.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

async fn render_category(
    state: &AppState,
    slug: String,
    query: LocaleQuery,
) -> AppResult<HttpResponse> {
    let locale = state.resolve_locale(query.locale.as_deref())?;
    let slug = Slug::new(slug)?;

    let category = state
        .catalog
        .get_by_slug(&slug, &locale)
        .await?
        .ok_or_else(|| DomainError::NotFound {
            entity_type: "category",
            key: slug.to_string(),
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CategoryResponse::from(category))))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::middleware::from_fn;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::Value;

    use gigatlas_core::domain::{Category, Locale, Post, PostStatus};
    use gigatlas_infra::{InMemoryCategoryRepository, InMemoryPostRepository};

    use super::*;
    use crate::handlers::configure_routes;
    use crate::observability::propagate_request_id;

    async fn seeded_state() -> AppState {
        let categories = Arc::new(InMemoryCategoryRepository::new());
        let posts = Arc::new(InMemoryPostRepository::new());

        let en = Locale::new("en").unwrap();
        let nl = Locale::new("nl").unwrap();
        let design = Category::new(Slug::new("design").unwrap(), en.clone(), "Design");
        let seo = Category::new(Slug::new("seo").unwrap(), en.clone(), "SEO");
        let ontwerp = Category::new(Slug::new("design").unwrap(), nl, "Ontwerp");

        posts
            .insert(
                Post::new(Some(design.id), "Best design gigs", "design-gigs", en.clone())
                    .with_status(PostStatus::Published),
            )
            .await;
        posts
            .insert(Post::new(Some(design.id), "Draft", "draft", en))
            .await;

        for category in [seo, design, ontwerp] {
            categories.insert(category).await.unwrap();
        }

        AppState::in_memory(categories, posts, Locale::default())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        call_json(test::TestRequest::get().uri(uri)).await
    }

    async fn call_json(req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(propagate_request_id))
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let body: Value = test::read_body_json(res).await;
        (status, body)
    }

    #[actix_rt::test]
    async fn test_list_categories_sorted_with_counts() {
        let (status, body) = get_json("/api/categories?locale=en").await;

        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "Design");
        assert_eq!(data[0]["postCount"], 1);
        assert_eq!(data[1]["name"], "SEO");
        assert_eq!(data[1]["postCount"], 0);
    }

    #[actix_rt::test]
    async fn test_list_categories_uses_default_locale() {
        let (status, body) = get_json("/api/categories").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[actix_rt::test]
    async fn test_list_categories_unknown_locale_is_empty() {
        let (status, body) = get_json("/api/categories?locale=de").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[actix_rt::test]
    async fn test_blank_locale_is_bad_request() {
        let (status, body) = get_json("/api/categories?locale=%20").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[actix_rt::test]
    async fn test_get_category_by_slug() {
        let (status, body) = get_json("/api/categories/design?locale=nl").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Ontwerp");
        assert_eq!(body["data"]["locale"], "nl");
        assert_eq!(body["data"]["postCount"], 0);
    }

    #[actix_rt::test]
    async fn test_unknown_slug_is_not_found() {
        let (status, body) = get_json("/api/categories/nonexistent?locale=en").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["title"], "Not Found");
        assert_eq!(body["detail"], "category 'nonexistent' not found");
    }

    #[actix_rt::test]
    async fn test_not_found_body_carries_request_id() {
        let req = test::TestRequest::get()
            .uri("/api/categories/nonexistent?locale=en")
            .insert_header(("X-Request-ID", "abc"));

        let (status, body) = call_json(req).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["request_id"], "abc");
    }

    #[actix_rt::test]
    async fn test_padded_slug_is_bad_request() {
        let (status, _) = get_json("/api/categories/%20design%20?locale=en").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json("/api/categories/design?locale=%20en").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
