//! Request ID middleware - tags every request and response with an `X-Request-ID`.

use std::future::{Ready, ready};

use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest,
    body::MessageBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
    middleware::Next,
};
use uuid::Uuid;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: &str = "x-request-id";

/// Reuse the caller's request ID (from a client or load balancer) or mint a
/// new one, store it in the request extensions and echo it on the response.
pub async fn propagate_request_id(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(request_id.clone()));

    tracing::debug!(request_id = %request_id, path = req.path(), "Processing request");

    let mut res = next.call(req).await?;

    res.headers_mut().insert(
        HeaderName::from_static(REQUEST_ID_HEADER),
        HeaderValue::from_str(&request_id).unwrap_or_else(|_| HeaderValue::from_static("unknown")),
    );

    Ok(res)
}

/// Request ID extractor for handlers.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Falls back to a fresh ID when the middleware is not installed.
impl FromRequest for RequestId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .cloned()
            .unwrap_or_else(|| RequestId(Uuid::new_v4().to_string()));

        ready(Ok(request_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::middleware::from_fn;
    use actix_web::{App, HttpResponse, test, web};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn echo(request_id: RequestId) -> HttpResponse {
        HttpResponse::Ok().body(request_id.0)
    }

    #[actix_rt::test]
    async fn test_incoming_request_id_is_echoed() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(propagate_request_id))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((REQUEST_ID_HEADER, "abc-123"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.headers().get(REQUEST_ID_HEADER).unwrap(), "abc-123");
    }

    #[actix_rt::test]
    async fn test_missing_request_id_is_generated() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(propagate_request_id))
                .route("/", web::get().to(ok)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let value = res.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();

        assert!(Uuid::parse_str(value).is_ok());
    }

    #[actix_rt::test]
    async fn test_handlers_see_stored_request_id() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(propagate_request_id))
                .route("/", web::get().to(echo)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((REQUEST_ID_HEADER, "abc-123"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "abc-123");
    }
}
