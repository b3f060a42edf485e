use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use super::dto::{LoginRequest, LoginResponse};
use super::service::AuthService;
use crate::global::validator::ValidatedJson;
use crate::state::AppState;
use crate::utils::cookie::{access_token_cookie, expired_access_token_cookie};
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 소셜 로그인
///
/// 구글/카카오 액세스 토큰을 검증한 뒤 서비스 JWT를 발급합니다.
/// 미가입 점주는 자동으로 가입 처리됩니다.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "로그인 성공", body = LoginResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "유효하지 않은 소셜 토큰", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<BaseResponse<LoginResponse>>), AppError> {
    let max_age = state.config.jwt_expiration;
    let result = AuthService::login(state, req).await?;

    let jar = jar.add(access_token_cookie(result.access_token.clone(), max_age));

    Ok((jar, Json(BaseResponse::success(result))))
}

/// 로그아웃
///
/// access_token 쿠키를 만료시킵니다.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 200, description = "로그아웃 성공")
    ),
    tag = "Auth"
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<BaseResponse<()>>) {
    let jar = jar.add(expired_access_token_cookie());

    (
        jar,
        Json(BaseResponse::success_with_message((), "로그아웃되었습니다.")),
    )
}
