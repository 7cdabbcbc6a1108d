//! 考核任务存储操作

use super::SeaOrmStorage;
use crate::entity::admissions::{ActiveModel, Column, Entity as Admissions};
use crate::errors::{Result, TrainerError};
use crate::models::admissions::entities::{Admission, AdmissionStatus, average_rating};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 为多个用户分配同一场景；任何一行失败则整体回滚
    pub async fn assign_admissions_impl(
        &self,
        scenario_id: i64,
        user_ids: &[i64],
    ) -> Result<Vec<Admission>> {
        let pairs: Vec<(i64, i64)> = user_ids.iter().map(|&u| (u, scenario_id)).collect();
        self.insert_admissions(&pairs).await
    }

    /// 为一个用户分配多个场景；任何一行失败则整体回滚
    pub async fn assign_scenarios_to_user_impl(
        &self,
        user_id: i64,
        scenario_ids: &[i64],
    ) -> Result<Vec<Admission>> {
        let pairs: Vec<(i64, i64)> = scenario_ids.iter().map(|&s| (user_id, s)).collect();
        self.insert_admissions(&pairs).await
    }

    async fn insert_admissions(&self, pairs: &[(i64, i64)]) -> Result<Vec<Admission>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrainerError::database_operation(format!("开启事务失败: {e}")))?;

        let mut created = Vec::with_capacity(pairs.len());
        for &(user_id, scenario_id) in pairs {
            created.push(Self::insert_admission(&txn, Admission::assigned(user_id, scenario_id)).await?);
        }

        txn.commit()
            .await
            .map_err(|e| TrainerError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(created)
    }

    async fn insert_admission<C: ConnectionTrait>(conn: &C, admission: Admission) -> Result<Admission> {
        let row = ActiveModel {
            rating: Set(admission.rating),
            status: Set(admission.status.to_string()),
            user_id: Set(admission.user_id),
            scenario_id: Set(admission.scenario_id),
            is_ready: Set(admission.is_ready.map(|t| t.timestamp_millis())),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(|e| {
            TrainerError::database_operation(format!(
                "创建考核任务失败 (user {}, scenario {}): {e}",
                admission.user_id, admission.scenario_id
            ))
        })?;

        Ok(row.into_admission())
    }

    /// 通过 ID 获取考核任务
    pub async fn get_admission_by_id_impl(&self, id: i64) -> Result<Option<Admission>> {
        let row = Admissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询考核任务失败: {e}")))?;

        Ok(row.map(|m| m.into_admission()))
    }

    /// 列出全部考核任务，按状态排序
    pub async fn list_admissions_impl(&self) -> Result<Vec<Admission>> {
        let rows = Admissions::find()
            .order_by_asc(Column::Status)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询考核任务列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_admission()).collect())
    }

    /// 用户的考核任务，按状态排序；可排除已完成的任务
    pub async fn list_admissions_by_user_impl(
        &self,
        user_id: i64,
        include_completed: bool,
    ) -> Result<Vec<Admission>> {
        let mut select = Admissions::find().filter(Column::UserId.eq(user_id));
        if !include_completed {
            select = select.filter(Column::Status.ne(AdmissionStatus::COMPLETED));
        }

        let rows = select
            .order_by_asc(Column::Status)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询用户考核任务失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_admission()).collect())
    }

    /// 评分：读取、修改、写回在同一事务内
    pub async fn grade_admission_impl(
        &self,
        id: i64,
        rating: Option<String>,
        status: Option<AdmissionStatus>,
    ) -> Result<Option<Admission>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrainerError::database_operation(format!("开启事务失败: {e}")))?;

        let row = Admissions::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询考核任务失败: {e}")))?;
        let Some(row) = row else {
            return Ok(None);
        };

        let mut admission = row.clone().into_admission();
        admission.grade(rating.as_deref(), status)?;

        let mut model: ActiveModel = row.into();
        model.rating = Set(admission.rating.clone());
        model.status = Set(admission.status.to_string());
        model.is_ready = Set(admission.is_ready.map(|t| t.timestamp_millis()));
        let updated = model
            .update(&txn)
            .await
            .map_err(|e| TrainerError::database_operation(format!("更新考核任务失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| TrainerError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_admission()))
    }

    /// 删除考核任务
    pub async fn delete_admission_impl(&self, id: i64) -> Result<bool> {
        let result = Admissions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("删除考核任务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 用户全部任务评分的平均值
    pub async fn average_rating_for_user_impl(&self, user_id: i64) -> Result<f64> {
        let ratings: Vec<String> = Admissions::find()
            .select_only()
            .column(Column::Rating)
            .filter(Column::UserId.eq(user_id))
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| TrainerError::database_operation(format!("查询用户评分失败: {e}")))?;

        average_rating(&ratings)
    }
}
