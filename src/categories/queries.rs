/// 모든 카테고리 조회
pub const LIST_CATEGORIES: &str = "SELECT id, description, category FROM categories";
