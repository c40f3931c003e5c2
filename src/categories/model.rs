use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 카테고리 모델 (읽기 전용)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category: String,
}
