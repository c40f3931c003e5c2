/// 상품 저장소
/// 1. 단건 조회
/// 2. 전체 / 페이지 조회
/// 3. 생성
/// 4. 입찰
// region:    --- Imports
use super::model::{AcceptedBid, BidState, BidSubmission, Item, ItemListing, ItemSummary, NewItem};
use super::queries;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::pagination::Pagination;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
// endregion: --- Imports

// region:    --- Item Repository Trait
/// 상품 저장소 트레이트
/// 입력 값 검증(`validate`)은 호출자(핸들러)가 먼저 수행한다.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<ItemSummary, ApiError>;

    /// 정렬은 보장하지 않는다
    async fn list(&self) -> Result<Vec<ItemListing>, ApiError>;

    async fn list_paginated(&self, pagination: Pagination) -> Result<Vec<ItemListing>, ApiError>;

    async fn create(&self, item: NewItem) -> Result<Item, ApiError>;

    /// 현재 입찰가보다 높은 경우에만 입찰을 반영한다
    async fn bid(&self, id: Uuid, submission: BidSubmission) -> Result<AcceptedBid, ApiError>;

    /// `count` 개의 샘플 상품 생성, 생성된 행 수 반환
    async fn seed(&self, count: usize) -> Result<u64, ApiError>;
}
// endregion: --- Item Repository Trait

// region:    --- Postgres Item Repository
pub struct PgItemRepository {
    db_manager: Arc<DatabaseManager>,
}

impl PgItemRepository {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn get(&self, id: Uuid) -> Result<ItemSummary, ApiError> {
        info!("{:<12} --> 상품 조회 id: {}", "Query", id);
        sqlx::query_as::<_, ItemSummary>(queries::GET_ITEM)
            .bind(id)
            .fetch_optional(self.db_manager.pool())
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("상품을 찾을 수 없습니다: {id}")))
    }

    async fn list(&self) -> Result<Vec<ItemListing>, ApiError> {
        info!("{:<12} --> 모든 상품 조회", "Query");
        let items = sqlx::query_as::<_, ItemListing>(queries::LIST_ITEMS)
            .fetch_all(self.db_manager.pool())
            .await?;
        Ok(items)
    }

    async fn list_paginated(&self, pagination: Pagination) -> Result<Vec<ItemListing>, ApiError> {
        info!(
            "{:<12} --> 페이지 상품 조회 page: {}, size: {}",
            "Query", pagination.page, pagination.page_size
        );
        let items = sqlx::query_as::<_, ItemListing>(queries::LIST_ITEMS_PAGE)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(self.db_manager.pool())
            .await?;
        Ok(items)
    }

    async fn create(&self, item: NewItem) -> Result<Item, ApiError> {
        info!("{:<12} --> 상품 생성: {}", "Command", item.name);
        let created = sqlx::query_as::<_, Item>(queries::CREATE_ITEM)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .bind(item.bidding_end_date)
            .bind(&item.category)
            .fetch_one(self.db_manager.pool())
            .await?;
        Ok(created)
    }

    async fn bid(&self, id: Uuid, submission: BidSubmission) -> Result<AcceptedBid, ApiError> {
        info!(
            "{:<12} --> 입찰 요청 처리 id: {}, bid: {}, bidder: {}",
            "Command", id, submission.bid, submission.bidder
        );
        self.db_manager
            .transaction(move |tx| {
                Box::pin(async move {
                    let updated = sqlx::query(queries::PLACE_BID)
                        .bind(submission.bid)
                        .bind(&submission.bidder)
                        .bind(id)
                        .execute(&mut **tx)
                        .await?;

                    if updated.rows_affected() == 1 {
                        return Ok(AcceptedBid {
                            id,
                            bid: submission.bid,
                            bidder: submission.bidder,
                        });
                    }

                    // 갱신되지 않은 이유 판별
                    let state = sqlx::query_as::<_, BidState>(queries::GET_BID_STATE)
                        .bind(id)
                        .fetch_optional(&mut **tx)
                        .await?;
                    match state {
                        None => Err(ApiError::NotFound(format!(
                            "상품을 찾을 수 없습니다: {id}"
                        ))),
                        Some(state) => {
                            warn!(
                                "{:<12} --> 입찰 거절 id: {}, 현재 입찰가: {}",
                                "Command", id, state.current_bid
                            );
                            Err(state.rejection(id))
                        }
                    }
                })
            })
            .await
    }

    async fn seed(&self, count: usize) -> Result<u64, ApiError> {
        info!("{:<12} --> 샘플 상품 {}개 생성", "Command", count);
        if count == 0 {
            return Ok(0);
        }
        let count = i64::try_from(count)
            .map_err(|_| ApiError::InvalidArgument(format!("생성 개수가 너무 큽니다: {count}")))?;
        let result = sqlx::query(queries::SEED_ITEMS)
            .bind(count)
            .bind(Utc::now() + Duration::days(10))
            .execute(self.db_manager.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
// endregion: --- Postgres Item Repository
