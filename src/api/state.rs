// region:    --- Imports
use crate::categories::CategoryRepository;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::items::ItemRepository;
use async_trait::async_trait;
use std::sync::Arc;
// endregion: --- Imports

/// 헬스 체크 트레이트
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn check(&self) -> Result<(), ApiError>;
}

#[async_trait]
impl HealthCheck for DatabaseManager {
    async fn check(&self) -> Result<(), ApiError> {
        self.ping().await?;
        Ok(())
    }
}

/// 핸들러 공유 상태
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    pub fn new(
        items: Arc<dyn ItemRepository>,
        categories: Arc<dyn CategoryRepository>,
        health: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            items,
            categories,
            health,
        }
    }
}
