use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "SocialType")]
pub enum SocialType {
    #[sea_orm(string_value = "KAKAO")]
    #[serde(rename = "KAKAO")]
    Kakao,
    #[sea_orm(string_value = "GOOGLE")]
    #[serde(rename = "GOOGLE")]
    Google,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub owner_id: i64,
    pub email: String,
    pub nickname: Option<String>,
    pub social_type: SocialType,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "crate::domain::restaurant::entity::restaurant::Entity")]
    Restaurant,
    #[sea_orm(has_many = "crate::domain::survey::entity::survey::Entity")]
    Survey,
}

impl Related<crate::domain::restaurant::entity::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<crate::domain::survey::entity::survey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Survey.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
