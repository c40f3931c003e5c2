// region:    --- Imports
use super::state::AppState;
use crate::categories::Category;
use crate::error::ApiError;
use crate::items::{AcceptedBid, BidSubmission, Item, ItemListing, ItemSummary, NewItem};
use crate::pagination::Pagination;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{BoxError, Json};
use serde_json::json;
use std::collections::HashMap;
use tracing::{info, warn};
use uuid::Uuid;
// endregion: --- Imports

// region:    --- Parsing Helpers
/// 경로의 상품 id 해석
fn parse_item_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ApiError::MalformedInput(format!("잘못된 상품 id: {raw}")))
}

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::MalformedInput(rejection.body_text()))
}
// endregion: --- Parsing Helpers

// region:    --- Item Handlers

/// 상품 목록 조회
/// `page` 와 `numberOfItems` 가 함께 주어지면 해당 페이지만, 없으면 전체를 반환한다.
pub async fn handle_get_items(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<Vec<ItemListing>>, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::InvalidArgument(e.body_text()))?;
    info!("{:<12} --> 상품 목록 조회 params: {:?}", "Handler", params);

    let items = match Pagination::from_query(&params)? {
        Some(pagination) => state.items.list_paginated(pagination).await?,
        None => state.items.list().await?,
    };
    Ok(Json(items))
}

/// 상품 조회
pub async fn handle_get_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ItemSummary>, ApiError> {
    info!("{:<12} --> 상품 조회 id: {}", "Handler", raw_id);
    let id = parse_item_id(&raw_id)?;
    let item = state.items.get(id).await?;
    Ok(Json(item))
}

/// 상품 생성
pub async fn handle_create_item(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let new_item = parse_body(payload)?;
    info!("{:<12} --> 상품 생성 요청: {:?}", "Handler", new_item);
    new_item.validate()?;

    let item = state.items.create(new_item).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// 입찰 요청 처리
pub async fn handle_bid(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<BidSubmission>, JsonRejection>,
) -> Result<Json<AcceptedBid>, ApiError> {
    let id = parse_item_id(&raw_id)?;
    let submission = parse_body(payload)?;
    info!(
        "{:<12} --> 입찰 요청 처리 시작 id: {}, {:?}",
        "Handler", id, submission
    );
    submission.validate()?;

    let accepted = state.items.bid(id, submission).await?;
    Ok(Json(accepted))
}

// endregion: --- Item Handlers

// region:    --- Category Handlers

/// 모든 카테고리 조회
pub async fn handle_get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    info!("{:<12} --> 모든 카테고리 조회", "Handler");
    let categories = state.categories.list_categories().await?;
    Ok(Json(categories))
}

// endregion: --- Category Handlers

// region:    --- Health

pub async fn handle_healthz(State(state): State<AppState>) -> impl IntoResponse {
    match state.health.check().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(e) => {
            warn!("{:<12} --> 헬스 체크 실패: {:?}", "Health", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}

// endregion: --- Health

// region:    --- Fallback

/// 매칭되지 않는 경로
pub async fn handle_fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("경로를 찾을 수 없습니다: {}", uri.path()))
}

/// 미들웨어(타임아웃) 실패를 API 에러로 변환
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        warn!("{:<12} --> 요청 시간 초과", "Handler");
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

// endregion: --- Fallback

// endregion: --- Tests
