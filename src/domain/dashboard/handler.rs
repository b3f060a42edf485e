use axum::{
    extract::State,
    Json,
};

use super::dto::{DashboardQuery, DashboardResponse};
use super::service::DashboardService;
use crate::global::extract::ApiQuery;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 만족도 대시보드 API
///
/// 기간 내 응답 수, 전체/카테고리/질문별 만족도, 일자별 추이와 직전 동일 기간 대비 변화를 반환합니다.
/// 만족도는 긍정(LEFT) 응답 비율이며 소수점 첫째 자리까지 반올림합니다.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    params(DashboardQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "조회 성공", body = DashboardResponse),
        (status = 400, description = "잘못된 조회 기간", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "설문 없음", body = ErrorResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(query): ApiQuery<DashboardQuery>,
) -> Result<Json<BaseResponse<DashboardResponse>>, AppError> {
    let owner_id = user.owner_id()?;

    let result = DashboardService::get_dashboard(&state, owner_id, query).await?;

    Ok(Json(BaseResponse::success(result)))
}
