use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::{info, warn};

use super::dto::{OwnerProfileResponse, RestaurantSummary};
use super::entity::owner::{self, SocialType};
use crate::domain::restaurant::entity::restaurant;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct OwnerService;

impl OwnerService {
    /// 소셜 계정(이메일 + 제공자)으로 점주를 조회하고, 없으면 생성합니다.
    ///
    /// 반환값의 bool은 신규 생성 여부입니다.
    pub async fn find_or_create(
        db: &DatabaseConnection,
        email: &str,
        social_type: SocialType,
    ) -> Result<(owner::Model, bool), AppError> {
        if let Some(found) = Self::find_by_social(db, email, social_type.clone()).await? {
            return Ok((found, false));
        }

        let now = Utc::now().naive_utc();
        let nickname = email.split('@').next().map(str::to_string);

        let created = owner::ActiveModel {
            email: Set(email.to_string()),
            nickname: Set(nickname),
            social_type: Set(social_type.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await;

        match created {
            Ok(created) => {
                info!(owner_id = created.owner_id, "New owner registered");
                Ok((created, true))
            }
            // 동시 첫 로그인으로 UNIQUE(email, social_type)에 걸린 경우 먼저 생성된 점주를 사용
            Err(e) => match Self::find_by_social(db, email, social_type).await? {
                Some(found) => {
                    warn!(owner_id = found.owner_id, "Owner created by concurrent login");
                    Ok((found, false))
                }
                None => Err(AppError::InternalError(e.to_string())),
            },
        }
    }

    async fn find_by_social(
        db: &DatabaseConnection,
        email: &str,
        social_type: SocialType,
    ) -> Result<Option<owner::Model>, AppError> {
        owner::Entity::find()
            .filter(owner::Column::Email.eq(email))
            .filter(owner::Column::SocialType.eq(social_type))
            .one(db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))
    }

    /// 점주 프로필 조회
    pub async fn get_profile(
        state: &AppState,
        owner_id: i64,
    ) -> Result<OwnerProfileResponse, AppError> {
        let owner_model = owner::Entity::find_by_id(owner_id)
            .one(state.db.as_ref())
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::OwnerNotFound("존재하지 않는 사용자입니다.".to_string()))?;

        let restaurant_model = restaurant::Entity::find()
            .filter(restaurant::Column::OwnerId.eq(owner_id))
            .one(state.db.as_ref())
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(OwnerProfileResponse {
            owner_id: owner_model.owner_id,
            email: owner_model.email,
            nickname: owner_model.nickname,
            social_type: owner_model.social_type,
            restaurant: restaurant_model.map(|r| RestaurantSummary {
                restaurant_id: r.restaurant_id,
                name: r.name,
                code: r.code,
            }),
        })
    }
}
