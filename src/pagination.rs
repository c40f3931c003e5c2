/// 페이지네이션 쿼리 파라미터 검증
/// 허용된 파라미터(`page`, `numberOfItems`)만 받으며, 두 값은 함께 주어져야 한다.
// region:    --- Imports
use crate::error::ApiError;
use std::collections::HashMap;
// endregion: --- Imports

pub const PAGE_PARAM: &str = "page";
pub const PAGE_SIZE_PARAM: &str = "numberOfItems";

const ACCEPTED_PARAMS: [&str; 2] = [PAGE_PARAM, PAGE_SIZE_PARAM];

// region:    --- Pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Result<Self, ApiError> {
        if page < 1 {
            return Err(ApiError::InvalidArgument(format!(
                "{PAGE_PARAM} 는 1 이상이어야 합니다"
            )));
        }
        if page_size < 1 {
            return Err(ApiError::InvalidArgument(format!(
                "{PAGE_SIZE_PARAM} 는 1 이상이어야 합니다"
            )));
        }
        Ok(Self { page, page_size })
    }

    /// 쿼리 파라미터 해석
    /// 파라미터가 하나도 없으면 `None` (전체 목록), 일부만 있으면 에러.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Option<Self>, ApiError> {
        if let Some(unknown) = params
            .keys()
            .find(|key| !ACCEPTED_PARAMS.contains(&key.as_str()))
        {
            return Err(ApiError::InvalidArgument(format!(
                "허용되지 않은 쿼리 파라미터: {unknown}"
            )));
        }

        match (params.get(PAGE_PARAM), params.get(PAGE_SIZE_PARAM)) {
            (None, None) => Ok(None),
            (Some(page), Some(page_size)) => {
                let page = parse_number(PAGE_PARAM, page)?;
                let page_size = parse_number(PAGE_SIZE_PARAM, page_size)?;
                Self::new(page, page_size).map(Some)
            }
            (None, Some(_)) => Err(ApiError::InvalidArgument(format!(
                "{PAGE_SIZE_PARAM} 와 함께 {PAGE_PARAM} 가 필요합니다"
            ))),
            (Some(_), None) => Err(ApiError::InvalidArgument(format!(
                "{PAGE_PARAM} 와 함께 {PAGE_SIZE_PARAM} 가 필요합니다"
            ))),
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// offset = (page - 1) * page_size
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).saturating_mul(i64::from(self.page_size))
    }
}

fn parse_number(name: &str, value: &str) -> Result<u32, ApiError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ApiError::InvalidArgument(format!("{name} 는 숫자여야 합니다")))
}
// endregion: --- Pagination

// endregion: --- Tests
