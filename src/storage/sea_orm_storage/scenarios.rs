//! 场景存储操作

use std::collections::BTreeSet;

use super::SeaOrmStorage;
use crate::entity::accidents::{Column as AccidentColumn, Entity as Accidents};
use crate::entity::admissions::{Column as AdmissionColumn, Entity as Admissions};
use crate::entity::locations::{Column as LocationColumn, Entity as Locations};
use crate::entity::models::Entity as InstrumentModels;
use crate::entity::scenario_accidents::{
    ActiveModel as ScenarioAccidentActiveModel, Column as ScenarioAccidentColumn,
    Entity as ScenarioAccidents,
};
use crate::entity::scenarios::{ActiveModel, Column, Entity as Scenarios};
use crate::entity::sensors::Entity as Sensors;
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, TrainerError};
use crate::models::{
    catalog::entities::{Accident, LocationStatus},
    export::ScenarioGraph,
    scenarios::{
        entities::{Scenario, ScenarioDetail},
        requests::ScenarioRequest,
    },
    users::entities::User,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建场景
    pub async fn create_scenario_impl(&self, req: ScenarioRequest) -> Result<Scenario> {
        Self::ensure_accidents_present(&req.accident_ids)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrainerError::database_operation(format!("开启事务失败: {e}")))?;

        let scenario = ActiveModel {
            name: Set(req.name),
            location_id: Set(req.location_id),
            sensor_id: Set(req.sensor_id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| TrainerError::database_operation(format!("创建场景失败: {e}")))?;

        Self::link_scenario_accidents(&txn, scenario.id, &req.accident_ids).await?;

        txn.commit()
            .await
            .map_err(|e| TrainerError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(scenario.into_scenario())
    }

    /// 列出全部场景
    pub async fn list_scenarios_impl(&self) -> Result<Vec<Scenario>> {
        let rows = Scenarios::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询场景列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_scenario()).collect())
    }

    /// 通过 ID 获取场景
    pub async fn get_scenario_by_id_impl(&self, id: i64) -> Result<Option<Scenario>> {
        let row = Scenarios::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询场景失败: {e}")))?;

        Ok(row.map(|m| m.into_scenario()))
    }

    /// 场景详情：地点、传感器、事故
    pub async fn get_scenario_detail_impl(&self, id: i64) -> Result<Option<ScenarioDetail>> {
        let Some(scenario) = self.get_scenario_by_id_impl(id).await? else {
            return Ok(None);
        };

        let location = self
            .get_location_by_id_impl(scenario.location_id)
            .await?
            .ok_or_else(|| {
                TrainerError::not_found(format!("Location {} not found", scenario.location_id))
            })?;
        let sensor = self
            .get_sensor_by_id_impl(scenario.sensor_id)
            .await?
            .ok_or_else(|| {
                TrainerError::not_found(format!("Sensor {} not found", scenario.sensor_id))
            })?;
        let accidents = self.list_scenario_accidents(id).await?;

        Ok(Some(ScenarioDetail {
            scenario,
            location,
            sensor,
            accidents,
        }))
    }

    async fn list_scenario_accidents(&self, scenario_id: i64) -> Result<Vec<Accident>> {
        let rows = Accidents::find()
            .inner_join(ScenarioAccidents)
            .filter(ScenarioAccidentColumn::ScenarioId.eq(scenario_id))
            .order_by_asc(AccidentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询场景事故失败: {e}")))?;

        rows.into_iter().map(|m| m.into_accident()).collect()
    }

    /// 更新场景，整体替换事故集合
    pub async fn update_scenario_impl(
        &self,
        id: i64,
        req: ScenarioRequest,
    ) -> Result<Option<Scenario>> {
        Self::ensure_accidents_present(&req.accident_ids)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrainerError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Scenarios::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询场景失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let scenario = ActiveModel {
            id: Set(id),
            name: Set(req.name),
            location_id: Set(req.location_id),
            sensor_id: Set(req.sensor_id),
        }
        .update(&txn)
        .await
        .map_err(|e| TrainerError::database_operation(format!("更新场景失败: {e}")))?;

        ScenarioAccidents::delete_many()
            .filter(ScenarioAccidentColumn::ScenarioId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("清除场景事故失败: {e}")))?;

        Self::link_scenario_accidents(&txn, id, &req.accident_ids).await?;

        txn.commit()
            .await
            .map_err(|e| TrainerError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(scenario.into_scenario()))
    }

    /// 追加事故，已关联的忽略
    pub async fn add_scenario_accidents_impl(
        &self,
        id: i64,
        accident_ids: Vec<i64>,
    ) -> Result<bool> {
        Self::ensure_accidents_present(&accident_ids)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrainerError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Scenarios::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询场景失败: {e}")))?;
        if existing.is_none() {
            return Ok(false);
        }

        let linked: BTreeSet<i64> = ScenarioAccidents::find()
            .select_only()
            .column(ScenarioAccidentColumn::AccidentId)
            .filter(ScenarioAccidentColumn::ScenarioId.eq(id))
            .into_tuple::<i64>()
            .all(&txn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询场景事故失败: {e}")))?
            .into_iter()
            .collect();

        let fresh: Vec<i64> = accident_ids
            .into_iter()
            .filter(|accident_id| !linked.contains(accident_id))
            .collect();
        if !fresh.is_empty() {
            Self::link_scenario_accidents(&txn, id, &fresh).await?;
        }

        txn.commit()
            .await
            .map_err(|e| TrainerError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    /// 移除一个事故
    pub async fn remove_scenario_accident_impl(&self, id: i64, accident_id: i64) -> Result<bool> {
        let result = ScenarioAccidents::delete_many()
            .filter(ScenarioAccidentColumn::ScenarioId.eq(id))
            .filter(ScenarioAccidentColumn::AccidentId.eq(accident_id))
            .exec(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("移除场景事故失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 地点已完成的场景
    pub async fn list_active_scenarios_impl(&self) -> Result<Vec<Scenario>> {
        let rows = Scenarios::find()
            .inner_join(Locations)
            .filter(LocationColumn::Status.eq(LocationStatus::COMPLETED))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询活动场景失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_scenario()).collect())
    }

    /// 没有该场景任务的用户
    pub async fn list_users_without_scenario_impl(&self, scenario_id: i64) -> Result<Vec<User>> {
        let assigned = Admissions::find()
            .select_only()
            .column(AdmissionColumn::UserId)
            .filter(AdmissionColumn::ScenarioId.eq(scenario_id))
            .into_query();

        let rows = Users::find()
            .filter(UserColumn::Id.not_in_subquery(assigned))
            .order_by_asc(UserColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询未分配用户失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_user()).collect())
    }

    /// 逐步查询：场景 -> 传感器 -> 型号 -> 类型名称，场景 -> 事故
    pub async fn load_scenario_graph_impl(&self, scenario_id: i64) -> Result<Option<ScenarioGraph>> {
        let Some(scenario) = self.get_scenario_by_id_impl(scenario_id).await? else {
            return Ok(None);
        };

        let sensor = Sensors::find_by_id(scenario.sensor_id)
            .one(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询传感器失败: {e}")))?
            .ok_or_else(|| {
                TrainerError::not_found(format!("Sensor {} not found", scenario.sensor_id))
            })?
            .into_sensor();

        let model_row = InstrumentModels::find_by_id(sensor.model_id)
            .one(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询型号失败: {e}")))?
            .ok_or_else(|| TrainerError::not_found(format!("Model {} not found", sensor.model_id)))?;
        let model = self.resolve_model_name(model_row).await?;

        let accidents = self.list_scenario_accidents(scenario_id).await?;

        Ok(Some(ScenarioGraph {
            scenario,
            sensor,
            model,
            accidents,
        }))
    }

    fn ensure_accidents_present(accident_ids: &[i64]) -> Result<()> {
        if accident_ids.is_empty() {
            return Err(TrainerError::validation(
                "A scenario must have at least one accident",
            ));
        }
        Ok(())
    }

    async fn link_scenario_accidents<C: ConnectionTrait>(
        conn: &C,
        scenario_id: i64,
        accident_ids: &[i64],
    ) -> Result<()> {
        let links: Vec<ScenarioAccidentActiveModel> = accident_ids
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|accident_id| ScenarioAccidentActiveModel {
                scenario_id: Set(scenario_id),
                accident_id: Set(accident_id),
            })
            .collect();

        ScenarioAccidents::insert_many(links)
            .exec_without_returning(conn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("关联场景事故失败: {e}")))?;

        Ok(())
    }
}
