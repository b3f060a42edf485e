use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::{info, warn};

use super::dto::{CreateRestaurantRequest, PublicRestaurantResponse, RestaurantResponse};
use super::entity::restaurant;
use crate::domain::survey::entity::survey::{self, SurveyStatus};
use crate::state::AppState;
use crate::utils::code::{generate_restaurant_code, normalize_restaurant_code};
use crate::utils::error::AppError;
use crate::utils::qr;

/// 코드 충돌 시 재시도 횟수
const MAX_CODE_ATTEMPTS: usize = 5;

/// INSERT 에러 메시지의 인덱스 이름으로 어떤 UNIQUE 제약과 충돌했는지 판별
#[derive(Debug, PartialEq, Eq)]
enum RestaurantConflict {
    Owner,
    Code,
}

fn classify_conflict(message: &str) -> Option<RestaurantConflict> {
    if message.contains("uq_restaurants_owner") {
        Some(RestaurantConflict::Owner)
    } else if message.contains("uq_restaurants_code") {
        Some(RestaurantConflict::Code)
    } else {
        None
    }
}

fn already_registered() -> AppError {
    AppError::RestaurantAlreadyExists("이미 등록된 식당이 있습니다.".to_string())
}

pub struct RestaurantService;

impl RestaurantService {
    /// 식당 등록 (점주당 1개)
    pub async fn create_restaurant(
        state: AppState,
        owner_id: i64,
        req: CreateRestaurantRequest,
    ) -> Result<RestaurantResponse, AppError> {
        // 1. 이미 등록한 식당이 있는지 확인
        let existing = restaurant::Entity::find()
            .filter(restaurant::Column::OwnerId.eq(owner_id))
            .one(state.db.as_ref())
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if existing.is_some() {
            return Err(already_registered());
        }

        // 2. 코드 발급 + 저장 (코드 UNIQUE 충돌 시 새 코드로 재시도)
        let name = req.name.trim().to_string();
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_restaurant_code();
            let now = Utc::now().naive_utc();
            let inserted = restaurant::ActiveModel {
                owner_id: Set(owner_id),
                name: Set(name.clone()),
                code: Set(code.clone()),
                qr_url: Set(qr::qr_image_url(&state.config.api_base_url, &code)),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(state.db.as_ref())
            .await;

            let created = match inserted {
                Ok(created) => created,
                Err(e) => match classify_conflict(&e.to_string()) {
                    Some(RestaurantConflict::Owner) => {
                        return Err(already_registered());
                    }
                    Some(RestaurantConflict::Code) => {
                        warn!(attempt, "Restaurant code collision");
                        continue;
                    }
                    None => return Err(AppError::InternalError(e.to_string())),
                },
            };

            info!(
                restaurant_id = created.restaurant_id,
                owner_id,
                code = %created.code,
                "Restaurant registered"
            );

            let link = qr::survey_link(&state.config.public_base_url, &created.code);
            return Ok(RestaurantResponse::from_model(created, link));
        }

        Err(AppError::internal_error(
            "Failed to issue a unique restaurant code",
        ))
    }

    /// 점주 본인의 식당 조회
    pub async fn get_my_restaurant(
        state: &AppState,
        owner_id: i64,
    ) -> Result<RestaurantResponse, AppError> {
        let model = Self::find_by_owner(state.db.as_ref(), owner_id).await?;
        let link = qr::survey_link(&state.config.public_base_url, &model.code);
        Ok(RestaurantResponse::from_model(model, link))
    }

    /// 점주의 식당을 찾고, 없으면 RESTAURANT4041
    pub async fn find_by_owner(
        db: &DatabaseConnection,
        owner_id: i64,
    ) -> Result<restaurant::Model, AppError> {
        restaurant::Entity::find()
            .filter(restaurant::Column::OwnerId.eq(owner_id))
            .one(db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| {
                AppError::RestaurantNotFound("등록된 식당이 없습니다.".to_string())
            })
    }

    /// 코드로 식당 조회 (고객용)
    pub async fn find_by_code(
        db: &DatabaseConnection,
        raw_code: &str,
    ) -> Result<restaurant::Model, AppError> {
        let not_found = || AppError::RestaurantNotFound("존재하지 않는 식당입니다.".to_string());

        // 형식이 맞지 않는 코드는 조회하지 않음
        let code = normalize_restaurant_code(raw_code).ok_or_else(not_found)?;

        restaurant::Entity::find()
            .filter(restaurant::Column::Code.eq(code))
            .one(db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(not_found)
    }

    /// 고객용 식당 정보 (현재 활성 설문 포함)
    pub async fn get_public_restaurant(
        state: &AppState,
        code: &str,
    ) -> Result<PublicRestaurantResponse, AppError> {
        let model = Self::find_by_code(state.db.as_ref(), code).await?;

        let active = survey::Entity::find()
            .filter(survey::Column::RestaurantId.eq(model.restaurant_id))
            .filter(survey::Column::Status.eq(SurveyStatus::Active))
            .one(state.db.as_ref())
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(PublicRestaurantResponse {
            name: model.name,
            code: model.code,
            active_survey_id: active.map(|s| s.survey_id),
        })
    }

    /// 식당 QR 이미지(SVG)
    pub async fn render_qr(state: &AppState, code: &str) -> Result<String, AppError> {
        let model = Self::find_by_code(state.db.as_ref(), code).await?;
        qr::render_svg(&qr::survey_link(&state.config.public_base_url, &model.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_owner_conflict() {
        let message = "Duplicate entry '7' for key 'restaurants.uq_restaurants_owner'";

        assert_eq!(classify_conflict(message), Some(RestaurantConflict::Owner));
    }

    #[test]
    fn should_classify_code_conflict() {
        let message = "Duplicate entry 'ABC234' for key 'restaurants.uq_restaurants_code'";

        assert_eq!(classify_conflict(message), Some(RestaurantConflict::Code));
    }

    #[test]
    fn should_ignore_unrelated_unique_index() {
        assert_eq!(classify_conflict("Duplicate entry 'x' for key 'PRIMARY'"), None);
    }

    #[test]
    fn already_registered_should_map_to_conflict_code() {
        assert_eq!(already_registered().error_code(), "RESTAURANT4091");
    }
}
