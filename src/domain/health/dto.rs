use std::time::Duration;

use serde::Serialize;
use utoipa::ToSchema;

/// 이 시간 이상 걸리면 degraded
const DEGRADED_LATENCY: Duration = Duration::from_millis(500);

/// `/health` 응답
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: HealthState,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    #[schema(example = 3600)]
    pub uptime_secs: u64,
    pub database: DatabaseCheck,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    /// DB는 응답하지만 느림
    Degraded,
    Unhealthy,
}

/// DB ping 결과
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseCheck {
    pub reachable: bool,
    #[schema(example = 4)]
    pub latency_ms: u64,
    /// 실패 사유 (연결 오류 또는 timeout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DatabaseCheck {
    pub fn reachable(latency: Duration) -> Self {
        Self {
            reachable: true,
            latency_ms: latency.as_millis() as u64,
            error: None,
        }
    }

    pub fn unreachable(latency: Duration, error: impl Into<String>) -> Self {
        Self {
            reachable: false,
            latency_ms: latency.as_millis() as u64,
            error: Some(error.into()),
        }
    }

    pub fn state(&self) -> HealthState {
        if !self.reachable {
            HealthState::Unhealthy
        } else if self.latency_ms >= DEGRADED_LATENCY.as_millis() as u64 {
            HealthState::Degraded
        } else {
            HealthState::Healthy
        }
    }
}
