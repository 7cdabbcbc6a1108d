//! 事故实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accidents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub mechanical_accident: bool,
    /// JSON 文本：参数名 -> 变化值
    #[sea_orm(column_type = "Text")]
    pub change_value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scenario_accidents::Entity")]
    ScenarioAccidents,
    #[sea_orm(has_many = "super::model_accidents::Entity")]
    ModelAccidents,
}

impl Related<super::scenario_accidents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScenarioAccidents.def()
    }
}

impl Related<super::model_accidents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelAccidents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_accident(self) -> crate::errors::Result<crate::models::catalog::entities::Accident> {
        Ok(crate::models::catalog::entities::Accident {
            id: self.id,
            name: self.name,
            mechanical_accident: self.mechanical_accident,
            change_value: serde_json::from_str(&self.change_value)?,
        })
    }
}
