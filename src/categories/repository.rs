// region:    --- Imports
use super::model::Category;
use super::queries;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
// endregion: --- Imports

// region:    --- Category Repository
/// 카테고리 저장소 트레이트
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// 모든 카테고리 조회 (정렬 보장 없음)
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
}

pub struct PgCategoryRepository {
    db_manager: Arc<DatabaseManager>,
}

impl PgCategoryRepository {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        info!("{:<12} --> 모든 카테고리 조회", "Query");
        let categories = sqlx::query_as::<_, Category>(queries::LIST_CATEGORIES)
            .fetch_all(self.db_manager.pool())
            .await?;
        Ok(categories)
    }
}
// endregion: --- Category Repository
