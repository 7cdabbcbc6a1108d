//! 地点实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub prefab: Option<String>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scenarios::Entity")]
    Scenarios,
    #[sea_orm(has_many = "super::sensor_locations::Entity")]
    SensorLocations,
}

impl Related<super::scenarios::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scenarios.def()
    }
}

impl Related<super::sensor_locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SensorLocations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_location(self) -> crate::models::catalog::entities::Location {
        use crate::models::catalog::entities::{Location, LocationStatus};

        Location {
            id: self.id,
            name: self.name,
            prefab: self.prefab,
            status: self.status.parse::<LocationStatus>().unwrap_or_default(),
        }
    }
}
