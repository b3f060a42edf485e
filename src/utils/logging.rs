//! 구조화 로깅 (JSON, UTC RFC 3339 시각)

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 미설정 시 필터. sqlx 쿼리 로그는 경고 이상만 남김
const DEFAULT_FILTER: &str = "info,tableside=debug,sea_orm=warn,sqlx=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// stdout JSON 로그를 켜고, `log_dir`가 있으면 `tableside.log.YYYY-MM-DD` 일별 파일에도 씁니다.
///
/// 파일 출력을 켠 경우 반환되는 guard를 main이 끝날 때까지 들고 있어야 버퍼가 flush됩니다.
pub fn init_logging(log_dir: Option<&str>) -> Option<WorkerGuard> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, "tableside.log"));
            let layer = fmt::layer()
                .json()
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_current_span(true)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true);

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter())
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Failed to initialize tracing: {}", err);
    }

    guard
}
