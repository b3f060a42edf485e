use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 설문 상태
///
/// DRAFT → ACTIVE_READY → ACTIVE, ACTIVE → ACTIVE_READY 만 허용됩니다.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "SurveyStatus")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurveyStatus {
    /// 작성 중 (질문 수정 가능)
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    /// 게시 완료, 활성화 대기
    #[sea_orm(string_value = "ACTIVE_READY")]
    ActiveReady,
    /// 고객 응답 수집 중 (식당당 최대 1개)
    #[sea_orm(string_value = "ACTIVE")]
    Active,
}

impl SurveyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SurveyStatus::Draft => "DRAFT",
            SurveyStatus::ActiveReady => "ACTIVE_READY",
            SurveyStatus::Active => "ACTIVE",
        }
    }

    /// 상태 전이 허용 여부
    ///
    /// 같은 상태로의 전이는 ACTIVE만 허용합니다 (활성화 요청의 멱등성).
    pub fn can_transition_to(self, next: SurveyStatus) -> bool {
        matches!(
            (self, next),
            (SurveyStatus::Draft, SurveyStatus::ActiveReady)
                | (SurveyStatus::ActiveReady, SurveyStatus::Active)
                | (SurveyStatus::Active, SurveyStatus::Active)
                | (SurveyStatus::Active, SurveyStatus::ActiveReady)
        )
    }
}

/// 설문 종류
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "SurveyType")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurveyType {
    /// 점주가 직접 구성한 질문
    #[sea_orm(string_value = "CUSTOM")]
    Custom,
    /// 고정 8문항 운영 설문
    #[sea_orm(string_value = "OPERATIONAL")]
    Operational,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "survey")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub survey_id: i64,
    pub owner_id: i64,
    pub restaurant_id: i64,
    pub title: String,
    pub location: Option<String>,
    pub status: SurveyStatus,
    pub survey_type: SurveyType,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::owner::entity::owner::Entity",
        from = "Column::OwnerId",
        to = "crate::domain::owner::entity::owner::Column::OwnerId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "crate::domain::restaurant::entity::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "crate::domain::restaurant::entity::restaurant::Column::RestaurantId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Restaurant,
    #[sea_orm(has_many = "super::survey_question::Entity")]
    SurveyQuestion,
    #[sea_orm(has_many = "super::survey_response::Entity")]
    SurveyResponse,
}

impl Related<crate::domain::owner::entity::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<crate::domain::restaurant::entity::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<super::survey_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SurveyQuestion.def()
    }
}

impl Related<super::survey_response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SurveyResponse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_allow_forward_transitions() {
        assert!(SurveyStatus::Draft.can_transition_to(SurveyStatus::ActiveReady));
        assert!(SurveyStatus::ActiveReady.can_transition_to(SurveyStatus::Active));
        assert!(SurveyStatus::Active.can_transition_to(SurveyStatus::ActiveReady));
    }

    #[test]
    fn should_treat_repeated_activation_as_allowed() {
        assert!(SurveyStatus::Active.can_transition_to(SurveyStatus::Active));
    }

    #[test]
    fn should_reject_skipping_or_reverting_to_draft() {
        assert!(!SurveyStatus::Draft.can_transition_to(SurveyStatus::Active));
        assert!(!SurveyStatus::ActiveReady.can_transition_to(SurveyStatus::Draft));
        assert!(!SurveyStatus::Active.can_transition_to(SurveyStatus::Draft));
        assert!(!SurveyStatus::Draft.can_transition_to(SurveyStatus::Draft));
        assert!(!SurveyStatus::ActiveReady.can_transition_to(SurveyStatus::ActiveReady));
    }

    #[test]
    fn status_should_serialize_screaming_snake_case() {
        let json = serde_json::to_string(&SurveyStatus::ActiveReady).unwrap();
        assert_eq!(json, "\"ACTIVE_READY\"");
    }
}
