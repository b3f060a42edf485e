use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};

use super::dto::{CreateRestaurantRequest, PublicRestaurantResponse, RestaurantResponse};
use super::service::RestaurantService;
use crate::global::extract::ApiPath;
use crate::global::validator::ValidatedJson;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 식당 등록 API
///
/// 식당 코드와 QR 이미지를 함께 발급합니다. 점주당 하나의 식당만 등록할 수 있습니다.
#[utoipa::path(
    post,
    path = "/api/v1/restaurants",
    request_body = CreateRestaurantRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "식당 등록 성공", body = RestaurantResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 409, description = "이미 등록된 식당 존재", body = ErrorResponse)
    ),
    tag = "Restaurant"
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateRestaurantRequest>,
) -> Result<Json<BaseResponse<RestaurantResponse>>, AppError> {
    let owner_id = user.owner_id()?;

    let result = RestaurantService::create_restaurant(state, owner_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 내 식당 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/restaurants/me",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "조회 성공", body = RestaurantResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "등록된 식당 없음", body = ErrorResponse)
    ),
    tag = "Restaurant"
)]
pub async fn get_my_restaurant(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BaseResponse<RestaurantResponse>>, AppError> {
    let owner_id = user.owner_id()?;

    let result = RestaurantService::get_my_restaurant(&state, owner_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 고객용 식당 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/public/restaurants/{code}",
    params(
        ("code" = String, Path, description = "식당 코드")
    ),
    responses(
        (status = 200, description = "조회 성공", body = PublicRestaurantResponse),
        (status = 404, description = "존재하지 않는 식당", body = ErrorResponse)
    ),
    tag = "Public"
)]
pub async fn get_public_restaurant(
    State(state): State<AppState>,
    ApiPath(code): ApiPath<String>,
) -> Result<Json<BaseResponse<PublicRestaurantResponse>>, AppError> {
    let result = RestaurantService::get_public_restaurant(&state, &code).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 식당 QR 이미지 API
///
/// 고객용 설문 링크를 담은 QR 코드를 SVG로 반환합니다.
#[utoipa::path(
    get,
    path = "/api/v1/public/restaurants/{code}/qr.svg",
    params(
        ("code" = String, Path, description = "식당 코드")
    ),
    responses(
        (status = 200, description = "SVG 이미지", content_type = "image/svg+xml"),
        (status = 404, description = "존재하지 않는 식당", body = ErrorResponse)
    ),
    tag = "Public"
)]
pub async fn get_qr_image(
    State(state): State<AppState>,
    ApiPath(code): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let svg = RestaurantService::render_qr(&state, &code).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        svg,
    ))
}
