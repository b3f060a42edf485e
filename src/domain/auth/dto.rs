use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::owner::entity::owner::SocialType;

/// 소셜 로그인 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// 소셜 서비스 구분 (GOOGLE, KAKAO)
    pub provider: SocialType,

    /// 소셜 서비스에서 발급받은 Access Token
    #[validate(length(min = 1, message = "accessToken은 필수입니다"))]
    pub access_token: String,
}

/// 소셜 로그인 응답 DTO
///
/// 토큰은 본문과 `access_token` 쿠키로 함께 전달됩니다.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub owner_id: i64,
    pub email: String,
    /// 이번 로그인에서 처음 가입된 점주인지 여부
    pub is_new_owner: bool,
    pub access_token: String,
    /// 토큰 만료까지 남은 시간(초)
    pub expires_in: i64,
}
