use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::restaurant;
use crate::global::validator::not_blank;

/// 식당 등록 요청
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    #[validate(
        length(min = 1, max = 50, message = "식당 이름은 1~50자여야 합니다."),
        custom(function = "not_blank", message = "식당 이름은 1~50자여야 합니다.")
    )]
    pub name: String,
}

/// 점주용 식당 정보
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub restaurant_id: i64,
    pub name: String,
    pub code: String,
    /// QR 이미지 주소
    pub qr_url: String,
    /// QR이 가리키는 고객용 설문 링크
    pub survey_link: String,
    pub created_at: String,
}

impl RestaurantResponse {
    pub fn from_model(model: restaurant::Model, survey_link: String) -> Self {
        Self {
            restaurant_id: model.restaurant_id,
            name: model.name,
            code: model.code,
            qr_url: model.qr_url,
            survey_link,
            created_at: model.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// 고객용 식당 조회 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicRestaurantResponse {
    pub name: String,
    pub code: String,
    /// 현재 응답을 받는 설문 (없으면 null)
    pub active_survey_id: Option<i64>,
}
