use std::net::SocketAddr;
use std::sync::Arc;

use tableside::config::{establish_connection, AppConfig};
use tableside::domain::health::init_start_time;
use tableside::shutdown::shutdown_signal;
use tableside::utils::logging::init_logging;
use tableside::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 설정 로드
    let config = AppConfig::from_env()?;

    // 3. 로깅 초기화 (guard는 종료 시까지 유지)
    let _log_guard = init_logging(config.log_dir.as_deref());
    init_start_time();

    // 4. DB 연결
    let db = establish_connection(&config.database_url).await?;

    // 5. 라우터 설정
    let port = config.server_port;
    let app = app(AppState {
        db: Arc::new(db),
        config,
    });

    // 6. 서버 실행
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
