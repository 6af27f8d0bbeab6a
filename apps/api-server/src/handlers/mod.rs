//! HTTP handlers and route configuration.

mod categories;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/categories")
                    .route("", web::get().to(categories::list_categories))
                    .route("/{slug}", web::get().to(categories::get_category)),
            ),
    );
}
