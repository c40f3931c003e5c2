#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use item_listing_service::api::{self, AppState, HealthCheck};
use item_listing_service::categories::{Category, CategoryRepository};
use item_listing_service::error::ApiError;
use item_listing_service::items::{
    AcceptedBid, BidState, BidSubmission, Item, ItemListing, ItemRepository, ItemSummary, NewItem,
};
use item_listing_service::pagination::Pagination;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use uuid::Uuid;

/// 메모리 기반 상품 저장소 (삽입 순서 유지)
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Mutex<Vec<Item>>,
    pub calls: AtomicUsize,
}

impl InMemoryItemRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get(&self, id: Uuid) -> Result<ItemSummary, ApiError> {
        self.touch();
        let items = self.items.lock().unwrap();
        items
            .iter()
            .find(|item| item.id == id)
            .map(ItemSummary::from)
            .ok_or_else(|| ApiError::NotFound(format!("상품을 찾을 수 없습니다: {id}")))
    }

    async fn list(&self) -> Result<Vec<ItemListing>, ApiError> {
        self.touch();
        let items = self.items.lock().unwrap();
        Ok(items.iter().map(ItemListing::from).collect())
    }

    async fn list_paginated(&self, pagination: Pagination) -> Result<Vec<ItemListing>, ApiError> {
        self.touch();
        let items = self.items.lock().unwrap();
        let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(pagination.limit()).unwrap_or(usize::MAX);
        Ok(items
            .iter()
            .skip(offset)
            .take(limit)
            .map(ItemListing::from)
            .collect())
    }

    async fn create(&self, item: NewItem) -> Result<Item, ApiError> {
        self.touch();
        let created = Item {
            id: Uuid::new_v4(),
            name: item.name,
            description: item.description,
            price: item.price,
            current_bid: 0.0,
            current_bidder: None,
            bidding_end_date: item.bidding_end_date,
            category: item.category,
        };
        self.items.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn bid(&self, id: Uuid, submission: BidSubmission) -> Result<AcceptedBid, ApiError> {
        self.touch();
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("상품을 찾을 수 없습니다: {id}")))?;

        let closed = item.bidding_end_date.is_some_and(|end| end <= Utc::now());
        if closed || submission.bid <= item.current_bid {
            let state = BidState {
                current_bid: item.current_bid,
                closed,
            };
            return Err(state.rejection(id));
        }

        item.current_bid = submission.bid;
        item.current_bidder = Some(submission.bidder.clone());
        Ok(AcceptedBid {
            id,
            bid: submission.bid,
            bidder: submission.bidder,
        })
    }

    async fn seed(&self, count: usize) -> Result<u64, ApiError> {
        for i in 0..count {
            self.create(NewItem {
                name: format!("Item {i}"),
                description: None,
                price: 100.0,
                bidding_end_date: None,
                category: None,
            })
            .await?;
        }
        Ok(count as u64)
    }
}

/// 메모리 기반 카테고리 저장소
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    pub categories: Vec<Category>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.categories.clone())
    }
}

/// 항상 저장소 오류를 반환하는 카테고리 저장소
pub struct FailingCategoryRepository {
    pub detail: String,
}

#[async_trait]
impl CategoryRepository for FailingCategoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        Err(ApiError::StorageError(sqlx::Error::Protocol(
            self.detail.clone(),
        )))
    }
}

/// 응답 전에 지연되는 카테고리 저장소
pub struct SlowCategoryRepository {
    pub delay: Duration,
}

#[async_trait]
impl CategoryRepository for SlowCategoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        tokio::time::sleep(self.delay).await;
        Ok(vec![])
    }
}

pub struct AlwaysHealthy;

#[async_trait]
impl HealthCheck for AlwaysHealthy {
    async fn check(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

pub struct NeverHealthy;

#[async_trait]
impl HealthCheck for NeverHealthy {
    async fn check(&self) -> Result<(), ApiError> {
        Err(ApiError::StorageError(sqlx::Error::PoolTimedOut))
    }
}

/// 테스트 서버 실행 후 base url 반환
pub async fn spawn_app(
    items: Arc<InMemoryItemRepository>,
    categories: Arc<InMemoryCategoryRepository>,
) -> String {
    spawn_app_with(
        items,
        categories,
        Arc::new(AlwaysHealthy),
        Duration::from_secs(5),
    )
    .await
}

/// 저장소, 헬스 체크, 요청 타임아웃을 지정해 테스트 서버 실행
pub async fn spawn_app_with(
    items: Arc<dyn ItemRepository>,
    categories: Arc<dyn CategoryRepository>,
    health: Arc<dyn HealthCheck>,
    request_timeout: Duration,
) -> String {
    let state = AppState::new(items, categories, health);
    let app = api::routes(state, request_timeout);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });

    format!("http://{addr}")
}

/// 이름이 `Item 1..=count` 인 상품 생성
pub async fn create_items(repo: &InMemoryItemRepository, count: usize) -> Vec<Item> {
    let mut items = Vec::with_capacity(count);
    for i in 1..=count {
        let item = repo
            .create(NewItem {
                name: format!("Item {i}"),
                description: Some(format!("테스트 상품 {i}")),
                price: 100.0,
                bidding_end_date: None,
                category: None,
            })
            .await
            .unwrap();
        items.push(item);
    }
    items
}
