// region:    --- Imports
use auction_client::api::NoroffGateway;
use auction_client::config::Config;
use auction_client::handlers;
use auction_client::session::storage::FileStore;
use auction_client::session::SessionStore;
use auction_client::state::AppState;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
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

    let config = Config::load()?;
    info!("{:<12} --> 원격 API: {}", "Main", config.api_url);

    // 세션 저장소 (JSON 파일)
    let sessions = SessionStore::new(Arc::new(FileStore::new(&config.session_file)));
    info!(
        "{:<12} --> 세션 파일: {}",
        "Main",
        config.session_file.display()
    );

    let gateway = Arc::new(NoroffGateway::new(config.api_url.clone()));
    let state = AppState::new(gateway, sessions);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = handlers::routes(state)
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
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
