use std::collections::BTreeMap;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 이지선다 응답 (LEFT = 긍정)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Answer {
    Left,
    Right,
}

/// 질문 텍스트 → 응답
pub type AnswerMap = BTreeMap<String, Answer>;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "survey_responses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub response_id: i64,
    pub survey_id: i64,
    pub submitted_at: DateTime,
    pub answers: Json,
}

impl Model {
    /// 저장된 JSON 응답을 파싱합니다. 형식이 맞지 않으면 None.
    pub fn answer_map(&self) -> Option<AnswerMap> {
        serde_json::from_value(self.answers.clone()).ok()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::survey::Entity",
        from = "Column::SurveyId",
        to = "super::survey::Column::SurveyId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Survey,
}

impl Related<super::survey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Survey.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
