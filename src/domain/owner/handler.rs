use axum::{extract::State, Json};

use super::dto::OwnerProfileResponse;
use super::service::OwnerService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 로그인한 점주 프로필 조회 API
///
/// JWT 토큰의 점주 정보와 등록한 식당 요약을 반환합니다.
#[utoipa::path(
    get,
    path = "/api/v1/owners/me",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "프로필 조회 성공", body = OwnerProfileResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 사용자", body = ErrorResponse)
    ),
    tag = "Owner"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BaseResponse<OwnerProfileResponse>>, AppError> {
    let owner_id = user.owner_id()?;
    let profile = OwnerService::get_profile(&state, owner_id).await?;

    Ok(Json(BaseResponse::success(profile)))
}
