//! 目录存储操作：地点、传感器类型、型号、传感器、事故

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::SeaOrmStorage;
use crate::entity::accidents::{ActiveModel as AccidentActiveModel, Entity as Accidents};
use crate::entity::locations::{
    ActiveModel as LocationActiveModel, Column as LocationColumn, Entity as Locations,
};
use crate::entity::model_accidents::{
    ActiveModel as ModelAccidentActiveModel, Column as ModelAccidentColumn,
    Entity as ModelAccidents,
};
use crate::entity::models::{
    ActiveModel as InstrumentModelActiveModel, Column as InstrumentModelColumn,
    Entity as InstrumentModels, Model as InstrumentModelRow,
};
use crate::entity::sensor_locations::{
    ActiveModel as SensorLocationActiveModel, Column as SensorLocationColumn,
    Entity as SensorLocations,
};
use crate::entity::sensor_types::{
    ActiveModel as SensorTypeActiveModel, Column as SensorTypeColumn, Entity as SensorTypes,
};
use crate::entity::sensors::{
    ActiveModel as SensorActiveModel, Column as SensorColumn, Entity as Sensors,
};
use crate::errors::{Result, TrainerError};
use crate::models::catalog::{
    entities::{Accident, InstrumentModel, Location, Sensor, SensorType},
    requests::{CreateAccidentRequest, CreateModelRequest, LocationRequest, SensorRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建地点并关联传感器
    pub async fn create_location_impl(&self, req: LocationRequest) -> Result<Location> {
        if req.sensor_ids.is_empty() {
            return Err(TrainerError::validation(
                "A location must have at least one sensor",
            ));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrainerError::database_operation(format!("开启事务失败: {e}")))?;

        let location = LocationActiveModel {
            name: Set(req.name),
            prefab: Set(req.prefab),
            status: Set(req.status.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| TrainerError::database_operation(format!("创建地点失败: {e}")))?;

        Self::link_location_sensors(&txn, location.id, &req.sensor_ids).await?;

        txn.commit()
            .await
            .map_err(|e| TrainerError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(location.into_location())
    }

    /// 列出地点
    pub async fn list_locations_impl(&self) -> Result<Vec<Location>> {
        let rows = Locations::find()
            .order_by_asc(LocationColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询地点列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_location()).collect())
    }

    /// 通过 ID 获取地点
    pub async fn get_location_by_id_impl(&self, id: i64) -> Result<Option<Location>> {
        let row = Locations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询地点失败: {e}")))?;

        Ok(row.map(|m| m.into_location()))
    }

    /// 更新地点，整体替换传感器集合
    pub async fn update_location_impl(
        &self,
        id: i64,
        req: LocationRequest,
    ) -> Result<Option<Location>> {
        if req.sensor_ids.is_empty() {
            return Err(TrainerError::validation(
                "A location must have at least one sensor",
            ));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrainerError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Locations::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询地点失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let location = LocationActiveModel {
            id: Set(id),
            name: Set(req.name),
            prefab: Set(req.prefab),
            status: Set(req.status.to_string()),
        }
        .update(&txn)
        .await
        .map_err(|e| TrainerError::database_operation(format!("更新地点失败: {e}")))?;

        SensorLocations::delete_many()
            .filter(SensorLocationColumn::LocationId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("清除地点传感器失败: {e}")))?;

        Self::link_location_sensors(&txn, id, &req.sensor_ids).await?;

        txn.commit()
            .await
            .map_err(|e| TrainerError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(location.into_location()))
    }

    async fn link_location_sensors<C: ConnectionTrait>(
        conn: &C,
        location_id: i64,
        sensor_ids: &[i64],
    ) -> Result<()> {
        let links: Vec<SensorLocationActiveModel> = sensor_ids
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|sensor_id| SensorLocationActiveModel {
                sensor_id: Set(sensor_id),
                location_id: Set(location_id),
            })
            .collect();

        SensorLocations::insert_many(links)
            .exec_without_returning(conn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("关联地点传感器失败: {e}")))?;

        Ok(())
    }

    /// 地点下的传感器
    pub async fn list_location_sensors_impl(&self, location_id: i64) -> Result<Vec<Sensor>> {
        let rows = Sensors::find()
            .inner_join(SensorLocations)
            .filter(SensorLocationColumn::LocationId.eq(location_id))
            .order_by_asc(SensorColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询地点传感器失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_sensor()).collect())
    }

    /// 创建型号；传感器类型按名称创建或复用
    pub async fn create_model_impl(&self, req: CreateModelRequest) -> Result<InstrumentModel> {
        let type_name = req.sensor_type.trim().to_string();
        if type_name.is_empty() {
            return Err(TrainerError::validation("Sensor type name must not be empty"));
        }
        let specification = serde_json::to_string(&req.specification)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrainerError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = SensorTypes::find()
            .filter(SensorTypeColumn::Name.eq(type_name.as_str()))
            .one(&txn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询传感器类型失败: {e}")))?;

        let sensor_type = match existing {
            Some(sensor_type) => sensor_type,
            None => SensorTypeActiveModel {
                name: Set(type_name.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("创建传感器类型失败: {e}")))?,
        };

        let model = InstrumentModelActiveModel {
            specification: Set(specification),
            sensor_type_id: Set(sensor_type.id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| TrainerError::database_operation(format!("创建型号失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| TrainerError::database_operation(format!("提交事务失败: {e}")))?;

        model.into_instrument_model(sensor_type.name)
    }

    /// 列出型号
    pub async fn list_models_impl(&self) -> Result<Vec<InstrumentModel>> {
        let type_names: HashMap<i64, String> = SensorTypes::find()
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询传感器类型失败: {e}")))?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();

        let rows = InstrumentModels::find()
            .order_by_asc(InstrumentModelColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询型号列表失败: {e}")))?;

        rows.into_iter()
            .map(|m| {
                let name = type_names.get(&m.sensor_type_id).cloned().unwrap_or_default();
                m.into_instrument_model(name)
            })
            .collect()
    }

    /// 通过 ID 获取型号
    pub async fn get_model_by_id_impl(&self, id: i64) -> Result<Option<InstrumentModel>> {
        let row = InstrumentModels::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询型号失败: {e}")))?;

        match row {
            Some(model) => Ok(Some(self.resolve_model_name(model).await?)),
            None => Ok(None),
        }
    }

    pub(crate) async fn resolve_model_name(
        &self,
        model: InstrumentModelRow,
    ) -> Result<InstrumentModel> {
        let sensor_type = SensorTypes::find_by_id(model.sensor_type_id)
            .one(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询传感器类型失败: {e}")))?;

        let name = sensor_type.map(|t| t.name).unwrap_or_default();
        model.into_instrument_model(name)
    }

    /// 更新型号参数
    pub async fn update_model_specification_impl(
        &self,
        id: i64,
        specification: BTreeMap<String, String>,
    ) -> Result<Option<InstrumentModel>> {
        let existing = InstrumentModels::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询型号失败: {e}")))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: InstrumentModelActiveModel = existing.into();
        model.specification = Set(serde_json::to_string(&specification)?);
        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("更新型号失败: {e}")))?;

        Ok(Some(self.resolve_model_name(updated).await?))
    }

    /// 列出传感器类型
    pub async fn list_sensor_types_impl(&self) -> Result<Vec<SensorType>> {
        let rows = SensorTypes::find()
            .order_by_asc(SensorTypeColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询传感器类型失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_sensor_type()).collect())
    }

    /// 列出全部事故
    pub async fn list_accidents_impl(&self) -> Result<Vec<Accident>> {
        let rows = Accidents::find()
            .order_by_asc(crate::entity::accidents::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询事故列表失败: {e}")))?;

        rows.into_iter().map(|m| m.into_accident()).collect()
    }

    /// 型号关联的事故
    pub async fn list_model_accidents_impl(&self, model_id: i64) -> Result<Vec<Accident>> {
        let rows = Accidents::find()
            .inner_join(ModelAccidents)
            .filter(ModelAccidentColumn::ModelId.eq(model_id))
            .order_by_asc(crate::entity::accidents::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询型号事故失败: {e}")))?;

        rows.into_iter().map(|m| m.into_accident()).collect()
    }

    /// 创建事故并关联到型号
    pub async fn create_accident_for_model_impl(
        &self,
        model_id: i64,
        req: CreateAccidentRequest,
    ) -> Result<Accident> {
        let change_value = serde_json::to_string(&req.change_value)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrainerError::database_operation(format!("开启事务失败: {e}")))?;

        let model = InstrumentModels::find_by_id(model_id)
            .one(&txn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询型号失败: {e}")))?;
        if model.is_none() {
            return Err(TrainerError::not_found(format!("Model {model_id} not found")));
        }

        let accident = AccidentActiveModel {
            name: Set(req.name),
            mechanical_accident: Set(req.mechanical_accident),
            change_value: Set(change_value),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| TrainerError::database_operation(format!("创建事故失败: {e}")))?;

        ModelAccidents::insert(ModelAccidentActiveModel {
            model_id: Set(model_id),
            accident_id: Set(accident.id),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(|e| TrainerError::database_operation(format!("关联型号事故失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| TrainerError::database_operation(format!("提交事务失败: {e}")))?;

        accident.into_accident()
    }

    /// 解除型号与事故的关联
    pub async fn unlink_model_accident_impl(&self, model_id: i64, accident_id: i64) -> Result<bool> {
        let result = ModelAccidents::delete_many()
            .filter(ModelAccidentColumn::ModelId.eq(model_id))
            .filter(ModelAccidentColumn::AccidentId.eq(accident_id))
            .exec(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("解除型号事故关联失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建传感器
    pub async fn create_sensor_impl(&self, req: SensorRequest) -> Result<Sensor> {
        self.ensure_model_exists(req.model_id).await?;

        let sensor = SensorActiveModel {
            name: Set(req.name),
            kks: Set(req.kks),
            model_id: Set(req.model_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| TrainerError::database_operation(format!("创建传感器失败: {e}")))?;

        Ok(sensor.into_sensor())
    }

    /// 列出传感器
    pub async fn list_sensors_impl(&self) -> Result<Vec<Sensor>> {
        let rows = Sensors::find()
            .order_by_asc(SensorColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询传感器列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_sensor()).collect())
    }

    /// 通过 ID 获取传感器
    pub async fn get_sensor_by_id_impl(&self, id: i64) -> Result<Option<Sensor>> {
        let row = Sensors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询传感器失败: {e}")))?;

        Ok(row.map(|m| m.into_sensor()))
    }

    /// 更新传感器
    pub async fn update_sensor_impl(&self, id: i64, req: SensorRequest) -> Result<Option<Sensor>> {
        if self.get_sensor_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }
        self.ensure_model_exists(req.model_id).await?;

        let sensor = SensorActiveModel {
            id: Set(id),
            name: Set(req.name),
            kks: Set(req.kks),
            model_id: Set(req.model_id),
        }
        .update(&self.db)
        .await
        .map_err(|e| TrainerError::database_operation(format!("更新传感器失败: {e}")))?;

        Ok(Some(sensor.into_sensor()))
    }

    async fn ensure_model_exists(&self, model_id: i64) -> Result<()> {
        let model = InstrumentModels::find_by_id(model_id)
            .one(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询型号失败: {e}")))?;

        match model {
            Some(_) => Ok(()),
            None => Err(TrainerError::not_found(format!("Model {model_id} not found"))),
        }
    }
}
