//! 라우터 구성
//!
//! - `GET  /items`            상품 목록 (`page`, `numberOfItems` 로 페이지 조회)
//! - `POST /items`            상품 생성
//! - `GET  /items/:id`        상품 조회
//! - `POST /items/:id/bid`    입찰
//! - `GET  /categories`       카테고리 목록
//! - `GET  /healthz`          헬스 체크
//!
//! 타임아웃과 매칭되지 않는 경로도 `{"error", "code"}` 형태로 응답한다.

// region:    --- Imports
use super::handlers;
use super::state::AppState;
use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
// endregion: --- Imports

/// 전체 라우터 생성
pub fn routes(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/items",
            get(handlers::handle_get_items).post(handlers::handle_create_item),
        )
        .route("/items/:id", get(handlers::handle_get_item))
        .route("/items/:id/bid", post(handlers::handle_bid))
        .route("/categories", get(handlers::handle_get_categories))
        .route("/healthz", get(handlers::handle_healthz))
        .fallback(handlers::handle_fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handlers::handle_middleware_error))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .with_state(state)
}
