/// 상품 조회 (요약: id, 이름, 설명)
pub const GET_ITEM: &str = "SELECT id, item_name AS name, description FROM items WHERE id = $1";

/// 모든 상품 조회
pub const LIST_ITEMS: &str =
    "SELECT id, item_name AS name, description, current_bid, current_bidder FROM items";

/// 페이지 단위 상품 조회
pub const LIST_ITEMS_PAGE: &str = r#"
    SELECT id, item_name AS name, description, current_bid, current_bidder
    FROM items
    LIMIT $1 OFFSET $2
"#;

/// 상품 생성
pub const CREATE_ITEM: &str = r#"
    INSERT INTO items (item_name, description, price, bidding_end_date, category)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, item_name AS name, description, price, current_bid, current_bidder,
              bidding_end_date, category
"#;

/// 입찰 반영
/// 현재 입찰가보다 높고 마감되지 않은 경우에만 갱신된다.
pub const PLACE_BID: &str = r#"
    UPDATE items
    SET current_bid = $1, current_bidder = $2
    WHERE id = $3
      AND current_bid < $1
      AND (bidding_end_date IS NULL OR bidding_end_date > now())
"#;

/// 입찰 거절 사유 판별용 상태 조회
pub const GET_BID_STATE: &str = r#"
    SELECT current_bid,
           (bidding_end_date IS NOT NULL AND bidding_end_date <= now()) AS closed
    FROM items
    WHERE id = $1
"#;

/// 테스트용 상품 일괄 생성
pub const SEED_ITEMS: &str = r#"
    INSERT INTO items (item_name, price, current_bid, bidding_end_date)
    SELECT 'Item ' || g, 100, 0, $2
    FROM generate_series(0, $1 - 1) AS g
"#;
