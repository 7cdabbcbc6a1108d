//! 场景实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scenarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub location_id: i64,
    pub sensor_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::locations::Entity",
        from = "Column::LocationId",
        to = "super::locations::Column::Id"
    )]
    Location,
    #[sea_orm(
        belongs_to = "super::sensors::Entity",
        from = "Column::SensorId",
        to = "super::sensors::Column::Id"
    )]
    Sensor,
    #[sea_orm(has_many = "super::scenario_accidents::Entity")]
    ScenarioAccidents,
    #[sea_orm(has_many = "super::admissions::Entity")]
    Admissions,
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::sensors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sensor.def()
    }
}

impl Related<super::scenario_accidents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScenarioAccidents.def()
    }
}

impl Related<super::admissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_scenario(self) -> crate::models::scenarios::entities::Scenario {
        crate::models::scenarios::entities::Scenario {
            id: self.id,
            name: self.name,
            location_id: self.location_id,
            sensor_id: self.sensor_id,
        }
    }
}
