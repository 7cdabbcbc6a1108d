//! 传感器实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sensors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub kks: String,
    pub model_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::models::Entity",
        from = "Column::ModelId",
        to = "super::models::Column::Id"
    )]
    Model,
    #[sea_orm(has_many = "super::sensor_locations::Entity")]
    SensorLocations,
}

impl Related<super::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Model.def()
    }
}

impl Related<super::sensor_locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SensorLocations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_sensor(self) -> crate::models::catalog::entities::Sensor {
        crate::models::catalog::entities::Sensor {
            id: self.id,
            name: self.name,
            kks: self.kks,
            model_id: self.model_id,
        }
    }
}
