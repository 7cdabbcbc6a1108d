//! 仪表型号实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "models")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// JSON 文本：参数名 -> "数值 单位"
    #[sea_orm(column_type = "Text")]
    pub specification: String,
    pub sensor_type_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sensor_types::Entity",
        from = "Column::SensorTypeId",
        to = "super::sensor_types::Column::Id"
    )]
    SensorType,
    #[sea_orm(has_many = "super::sensors::Entity")]
    Sensors,
    #[sea_orm(has_many = "super::model_accidents::Entity")]
    ModelAccidents,
}

impl Related<super::sensor_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SensorType.def()
    }
}

impl Related<super::sensors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sensors.def()
    }
}

impl Related<super::model_accidents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelAccidents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 型号名称取自传感器类型
    pub fn into_instrument_model(
        self,
        type_name: String,
    ) -> crate::errors::Result<crate::models::catalog::entities::InstrumentModel> {
        Ok(crate::models::catalog::entities::InstrumentModel {
            id: self.id,
            name: type_name,
            sensor_type_id: self.sensor_type_id,
            specification: serde_json::from_str(&self.specification)?,
        })
    }
}
