// region:    --- Imports
use item_listing_service::api::{self, AppState};
use item_listing_service::categories::PgCategoryRepository;
use item_listing_service::config::AppConfig;
use item_listing_service::database::DatabaseManager;
use item_listing_service::items::{ItemRepository, PgItemRepository};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{:<12} --> 설정 로드 실패: {}", "Main", e);
            return Err(e.into());
        }
    };

    // DatabaseManager 생성
    let db_manager = Arc::new(DatabaseManager::new(&config).await?);

    // 데이터베이스 초기화
    if let Err(e) = db_manager.initialize_database().await {
        error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 데이터베이스 초기화 성공", "Main");

    let items = Arc::new(PgItemRepository::new(Arc::clone(&db_manager)));
    let categories = Arc::new(PgCategoryRepository::new(Arc::clone(&db_manager)));

    // 샘플 상품 생성
    if config.seed_items > 0 {
        let created = items.seed(config.seed_items).await?;
        info!("{:<12} --> 샘플 상품 {}개 생성", "Main", created);
    }

    // 라우터 설정
    let state = AppState::new(items, categories, db_manager);
    let routes_all = api::routes(state, config.request_timeout);

    let listener = TcpListener::bind(config.addr()).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
