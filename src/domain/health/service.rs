use std::sync::OnceLock;
use std::time::{Duration, Instant};

use sea_orm::DatabaseConnection;
use tokio::time::timeout;

use super::dto::{DatabaseCheck, HealthStatus};

static START_TIME: OnceLock<Instant> = OnceLock::new();

const DB_PING_TIMEOUT: Duration = Duration::from_secs(3);

/// 서버 시작 시각 기록 (main에서 한 번 호출)
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

fn uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

pub async fn check_health(db: &DatabaseConnection) -> HealthStatus {
    let database = ping_database(db).await;

    HealthStatus {
        status: database.state(),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: uptime_secs(),
        database,
    }
}

async fn ping_database(db: &DatabaseConnection) -> DatabaseCheck {
    let start = Instant::now();
    let result = timeout(DB_PING_TIMEOUT, db.ping()).await;
    let elapsed = start.elapsed();

    match result {
        Ok(Ok(())) => DatabaseCheck::reachable(elapsed),
        Ok(Err(e)) => {
            tracing::warn!(latency_ms = elapsed.as_millis() as u64, error = %e, "Database ping failed");
            DatabaseCheck::unreachable(elapsed, e.to_string())
        }
        Err(_) => {
            tracing::warn!("Database ping timed out");
            DatabaseCheck::unreachable(DB_PING_TIMEOUT, "timeout")
        }
    }
}
