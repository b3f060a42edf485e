use serde::Serialize;
use utoipa::ToSchema;

use super::entity::owner::SocialType;

/// 식당 요약 정보
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub restaurant_id: i64,
    pub name: String,
    pub code: String,
}

/// 점주 프로필 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfileResponse {
    pub owner_id: i64,
    pub email: String,
    pub nickname: Option<String>,
    pub social_type: SocialType,
    /// 등록한 식당 (미등록 시 null)
    pub restaurant: Option<RestaurantSummary>,
}
