//! 型号-事故 关联

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "model_accidents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub model_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub accident_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::models::Entity",
        from = "Column::ModelId",
        to = "super::models::Column::Id",
        on_delete = "Cascade"
    )]
    Model,
    #[sea_orm(
        belongs_to = "super::accidents::Entity",
        from = "Column::AccidentId",
        to = "super::accidents::Column::Id",
        on_delete = "Cascade"
    )]
    Accident,
}

impl Related<super::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Model.def()
    }
}

impl Related<super::accidents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accident.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
