//! 考核任务实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub rating: String,
    pub status: String,
    pub user_id: i64,
    pub scenario_id: i64,
    /// 毫秒时间戳
    pub is_ready: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Restrict"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::scenarios::Entity",
        from = "Column::ScenarioId",
        to = "super::scenarios::Column::Id",
        on_delete = "Restrict"
    )]
    Scenario,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::scenarios::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scenario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_admission(self) -> crate::models::admissions::entities::Admission {
        use crate::models::admissions::entities::{Admission, AdmissionStatus};
        use chrono::{DateTime, Utc};

        Admission {
            id: self.id,
            rating: self.rating,
            status: self
                .status
                .parse::<AdmissionStatus>()
                .unwrap_or(AdmissionStatus::Inactive),
            user_id: self.user_id,
            scenario_id: self.scenario_id,
            is_ready: self
                .is_ready
                .and_then(DateTime::<Utc>::from_timestamp_millis),
        }
    }
}
