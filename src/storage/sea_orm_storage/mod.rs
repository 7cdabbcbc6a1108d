//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod admissions;
mod catalog;
mod scenarios;
mod users;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{TrainerError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TrainerError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 基于已有连接创建存储并执行迁移（测试使用内存 SQLite）
    pub async fn with_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| TrainerError::database_operation(format!("数据库迁移失败: {e}")))?;
        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TrainerError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| TrainerError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TrainerError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TrainerError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    admissions::entities::{Admission, AdmissionStatus},
    catalog::{
        entities::{Accident, InstrumentModel, Location, Sensor, SensorType},
        requests::{CreateAccidentRequest, CreateModelRequest, LocationRequest, SensorRequest},
    },
    export::ScenarioGraph,
    scenarios::{
        entities::{Scenario, ScenarioDetail},
        requests::ScenarioRequest,
    },
    users::{
        entities::User,
        requests::{NewUser, TraineeListQuery, UpdateUserProfileRequest},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_trainees_with_pagination(
        &self,
        query: TraineeListQuery,
    ) -> Result<UserListResponse> {
        self.list_trainees_with_pagination_impl(query).await
    }

    async fn update_user_profile(
        &self,
        id: i64,
        update: UpdateUserProfileRequest,
    ) -> Result<Option<User>> {
        self.update_user_profile_impl(id, update).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 目录模块
    async fn create_location(&self, req: LocationRequest) -> Result<Location> {
        self.create_location_impl(req).await
    }

    async fn list_locations(&self) -> Result<Vec<Location>> {
        self.list_locations_impl().await
    }

    async fn get_location_by_id(&self, id: i64) -> Result<Option<Location>> {
        self.get_location_by_id_impl(id).await
    }

    async fn update_location(&self, id: i64, req: LocationRequest) -> Result<Option<Location>> {
        self.update_location_impl(id, req).await
    }

    async fn list_location_sensors(&self, location_id: i64) -> Result<Vec<Sensor>> {
        self.list_location_sensors_impl(location_id).await
    }

    async fn create_model(&self, req: CreateModelRequest) -> Result<InstrumentModel> {
        self.create_model_impl(req).await
    }

    async fn list_models(&self) -> Result<Vec<InstrumentModel>> {
        self.list_models_impl().await
    }

    async fn get_model_by_id(&self, id: i64) -> Result<Option<InstrumentModel>> {
        self.get_model_by_id_impl(id).await
    }

    async fn update_model_specification(
        &self,
        id: i64,
        specification: BTreeMap<String, String>,
    ) -> Result<Option<InstrumentModel>> {
        self.update_model_specification_impl(id, specification)
            .await
    }

    async fn list_sensor_types(&self) -> Result<Vec<SensorType>> {
        self.list_sensor_types_impl().await
    }

    async fn list_accidents(&self) -> Result<Vec<Accident>> {
        self.list_accidents_impl().await
    }

    async fn list_model_accidents(&self, model_id: i64) -> Result<Vec<Accident>> {
        self.list_model_accidents_impl(model_id).await
    }

    async fn create_accident_for_model(
        &self,
        model_id: i64,
        req: CreateAccidentRequest,
    ) -> Result<Accident> {
        self.create_accident_for_model_impl(model_id, req).await
    }

    async fn unlink_model_accident(&self, model_id: i64, accident_id: i64) -> Result<bool> {
        self.unlink_model_accident_impl(model_id, accident_id).await
    }

    async fn create_sensor(&self, req: SensorRequest) -> Result<Sensor> {
        self.create_sensor_impl(req).await
    }

    async fn list_sensors(&self) -> Result<Vec<Sensor>> {
        self.list_sensors_impl().await
    }

    async fn get_sensor_by_id(&self, id: i64) -> Result<Option<Sensor>> {
        self.get_sensor_by_id_impl(id).await
    }

    async fn update_sensor(&self, id: i64, req: SensorRequest) -> Result<Option<Sensor>> {
        self.update_sensor_impl(id, req).await
    }

    // 场景模块
    async fn create_scenario(&self, req: ScenarioRequest) -> Result<Scenario> {
        self.create_scenario_impl(req).await
    }

    async fn list_scenarios(&self) -> Result<Vec<Scenario>> {
        self.list_scenarios_impl().await
    }

    async fn get_scenario_by_id(&self, id: i64) -> Result<Option<Scenario>> {
        self.get_scenario_by_id_impl(id).await
    }

    async fn get_scenario_detail(&self, id: i64) -> Result<Option<ScenarioDetail>> {
        self.get_scenario_detail_impl(id).await
    }

    async fn update_scenario(&self, id: i64, req: ScenarioRequest) -> Result<Option<Scenario>> {
        self.update_scenario_impl(id, req).await
    }

    async fn add_scenario_accidents(&self, id: i64, accident_ids: Vec<i64>) -> Result<bool> {
        self.add_scenario_accidents_impl(id, accident_ids).await
    }

    async fn remove_scenario_accident(&self, id: i64, accident_id: i64) -> Result<bool> {
        self.remove_scenario_accident_impl(id, accident_id).await
    }

    async fn list_active_scenarios(&self) -> Result<Vec<Scenario>> {
        self.list_active_scenarios_impl().await
    }

    async fn list_users_without_scenario(&self, scenario_id: i64) -> Result<Vec<User>> {
        self.list_users_without_scenario_impl(scenario_id).await
    }

    async fn load_scenario_graph(&self, scenario_id: i64) -> Result<Option<ScenarioGraph>> {
        self.load_scenario_graph_impl(scenario_id).await
    }

    // 考核任务模块
    async fn assign_admissions(
        &self,
        scenario_id: i64,
        user_ids: &[i64],
    ) -> Result<Vec<Admission>> {
        self.assign_admissions_impl(scenario_id, user_ids).await
    }

    async fn assign_scenarios_to_user(
        &self,
        user_id: i64,
        scenario_ids: &[i64],
    ) -> Result<Vec<Admission>> {
        self.assign_scenarios_to_user_impl(user_id, scenario_ids)
            .await
    }

    async fn get_admission_by_id(&self, id: i64) -> Result<Option<Admission>> {
        self.get_admission_by_id_impl(id).await
    }

    async fn list_admissions(&self) -> Result<Vec<Admission>> {
        self.list_admissions_impl().await
    }

    async fn list_admissions_by_user(
        &self,
        user_id: i64,
        include_completed: bool,
    ) -> Result<Vec<Admission>> {
        self.list_admissions_by_user_impl(user_id, include_completed)
            .await
    }

    async fn grade_admission(
        &self,
        id: i64,
        rating: Option<String>,
        status: Option<AdmissionStatus>,
    ) -> Result<Option<Admission>> {
        self.grade_admission_impl(id, rating, status).await
    }

    async fn delete_admission(&self, id: i64) -> Result<bool> {
        self.delete_admission_impl(id).await
    }

    async fn average_rating_for_user(&self, user_id: i64) -> Result<f64> {
        self.average_rating_for_user_impl(user_id).await
    }
}
