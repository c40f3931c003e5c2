use crate::error::ApiError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 상품 모델 (생성 결과로 반환되는 전체 레코드)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(rename = "bid")]
    pub current_bid: f64,
    #[serde(rename = "bidder")]
    pub current_bidder: Option<String>,
    pub bidding_end_date: Option<DateTime<Utc>>,
    pub category: Option<String>,
}

// 단건 조회 결과 (id, 이름, 설명만 포함)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ItemSummary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

// 목록 조회 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ItemListing {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "bid")]
    pub current_bid: f64,
    #[serde(rename = "bidder")]
    pub current_bidder: Option<String>,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
        }
    }
}

impl From<&Item> for ItemListing {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            current_bid: item.current_bid,
            current_bidder: item.current_bidder.clone(),
        }
    }
}

// 상품 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub bidding_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewItem {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::InvalidArgument(
                "상품 이름은 비어 있을 수 없습니다".to_string(),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ApiError::InvalidArgument(
                "가격은 0 이상의 숫자여야 합니다".to_string(),
            ));
        }
        Ok(())
    }
}

// 입찰 요청 (상품 id 는 경로에서 받는다)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidSubmission {
    pub bid: f64,
    pub bidder: String,
}

impl BidSubmission {
    pub fn validate(&self) -> Result<(), ApiError> {
        if !self.bid.is_finite() || self.bid <= 0.0 {
            return Err(ApiError::InvalidArgument(
                "입찰 금액은 0 보다 커야 합니다".to_string(),
            ));
        }
        if self.bidder.trim().is_empty() {
            return Err(ApiError::InvalidArgument(
                "입찰자는 비어 있을 수 없습니다".to_string(),
            ));
        }
        Ok(())
    }
}

// 수락된 입찰
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedBid {
    pub id: Uuid,
    pub bid: f64,
    pub bidder: String,
}

// 입찰 거절 사유 판별용 상태
#[derive(Debug, sqlx::FromRow)]
pub struct BidState {
    pub current_bid: f64,
    pub closed: bool,
}

impl BidState {
    /// 조건부 갱신이 실패한 이유를 에러로 변환
    pub fn rejection(&self, id: Uuid) -> ApiError {
        if self.closed {
            ApiError::BidRejected {
                message: format!("경매가 이미 종료되었습니다: {id}"),
                current_bid: None,
            }
        } else {
            ApiError::BidRejected {
                message: "입찰 금액은 현재 입찰가보다 높아야 합니다.".to_string(),
                current_bid: Some(self.current_bid),
            }
        }
    }
}
