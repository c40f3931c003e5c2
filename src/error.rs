/// API 에러 타입
/// 저장소 계층의 모든 실패는 이 타입으로 호출자에게 반환되며, 요청 경계에서 HTTP 응답으로 변환된다.
// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;
// endregion: --- Imports

// region:    --- Api Error
#[derive(Debug, Error)]
pub enum ApiError {
    /// 식별자나 요청 바디를 해석할 수 없음
    #[error("{0}")]
    MalformedInput(String),

    /// 쿼리 파라미터 또는 입력 값이 잘못됨
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    /// 입찰이 거절됨 (현재 입찰가 이하 또는 마감된 경매)
    #[error("{message}")]
    BidRejected {
        message: String,
        current_bid: Option<f64>,
    },

    #[error("저장소 오류: {0}")]
    StorageError(#[from] sqlx::Error),

    #[error("요청 처리 시간이 초과되었습니다")]
    Timeout,

    /// 미들웨어 등 저장소 외부의 예기치 않은 실패
    #[error("내부 오류: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_) | ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BidRejected { .. } => StatusCode::CONFLICT,
            ApiError::StorageError(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MalformedInput(_) => "MALFORMED_INPUT",
            ApiError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BidRejected { .. } => "BID_REJECTED",
            ApiError::StorageError(_) => "STORAGE_ERROR",
            ApiError::Timeout => "REQUEST_TIMEOUT",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::StorageError(e) => {
                // 상세 내용은 로그로만 남긴다
                error!("{:<12} --> 저장소 오류: {:?}", "Error", e);
                json!({
                    "error": "저장소 처리 중 오류가 발생했습니다.",
                    "code": self.code()
                })
            }
            ApiError::Internal(detail) => {
                error!("{:<12} --> 내부 오류: {}", "Error", detail);
                json!({
                    "error": "요청 처리 중 오류가 발생했습니다.",
                    "code": self.code()
                })
            }
            ApiError::BidRejected {
                message,
                current_bid: Some(current_bid),
            } => json!({
                "error": message,
                "code": self.code(),
                "current_bid": current_bid
            }),
            _ => json!({
                "error": self.to_string(),
                "code": self.code()
            }),
        };

        (status, Json(body)).into_response()
    }
}
// endregion: --- Api Error

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::MalformedInput("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidArgument("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::StorageError(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bid_rejected_is_conflict() {
        let err = ApiError::BidRejected {
            message: "낮은 입찰".into(),
            current_bid: Some(10.0),
        };
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.code(), "BID_REJECTED");
    }

    #[test]
    fn test_timeout_and_internal_mapping() {
        assert_eq!(ApiError::Timeout.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(ApiError::Timeout.code(), "REQUEST_TIMEOUT");
        let internal = ApiError::Internal("layer".into());
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.code(), "INTERNAL_ERROR");
    }
}
// endregion: --- Tests
