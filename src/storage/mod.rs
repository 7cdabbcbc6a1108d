use std::collections::BTreeMap;
use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出学员（非教员、非管理员）
    async fn list_trainees_with_pagination(
        &self,
        query: TraineeListQuery,
    ) -> Result<UserListResponse>;
    // 更新用户资料
    async fn update_user_profile(
        &self,
        id: i64,
        update: UpdateUserProfileRequest,
    ) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 目录：地点
    async fn create_location(&self, req: LocationRequest) -> Result<Location>;
    async fn list_locations(&self) -> Result<Vec<Location>>;
    async fn get_location_by_id(&self, id: i64) -> Result<Option<Location>>;
    // 替换名称/状态/预制体以及传感器集合
    async fn update_location(&self, id: i64, req: LocationRequest) -> Result<Option<Location>>;
    async fn list_location_sensors(&self, location_id: i64) -> Result<Vec<Sensor>>;

    /// 目录：型号与传感器类型
    // 传感器类型按名称创建或复用
    async fn create_model(&self, req: CreateModelRequest) -> Result<InstrumentModel>;
    async fn list_models(&self) -> Result<Vec<InstrumentModel>>;
    async fn get_model_by_id(&self, id: i64) -> Result<Option<InstrumentModel>>;
    async fn update_model_specification(
        &self,
        id: i64,
        specification: BTreeMap<String, String>,
    ) -> Result<Option<InstrumentModel>>;
    async fn list_sensor_types(&self) -> Result<Vec<SensorType>>;

    /// 目录：事故
    async fn list_accidents(&self) -> Result<Vec<Accident>>;
    async fn list_model_accidents(&self, model_id: i64) -> Result<Vec<Accident>>;
    // 创建事故并关联到型号
    async fn create_accident_for_model(
        &self,
        model_id: i64,
        req: CreateAccidentRequest,
    ) -> Result<Accident>;
    async fn unlink_model_accident(&self, model_id: i64, accident_id: i64) -> Result<bool>;

    /// 目录：传感器
    async fn create_sensor(&self, req: SensorRequest) -> Result<Sensor>;
    async fn list_sensors(&self) -> Result<Vec<Sensor>>;
    async fn get_sensor_by_id(&self, id: i64) -> Result<Option<Sensor>>;
    async fn update_sensor(&self, id: i64, req: SensorRequest) -> Result<Option<Sensor>>;

    /// 场景管理方法
    async fn create_scenario(&self, req: ScenarioRequest) -> Result<Scenario>;
    async fn list_scenarios(&self) -> Result<Vec<Scenario>>;
    async fn get_scenario_by_id(&self, id: i64) -> Result<Option<Scenario>>;
    async fn get_scenario_detail(&self, id: i64) -> Result<Option<ScenarioDetail>>;
    // 替换传感器/地点/名称并整体替换事故集合
    async fn update_scenario(&self, id: i64, req: ScenarioRequest) -> Result<Option<Scenario>>;
    async fn add_scenario_accidents(&self, id: i64, accident_ids: Vec<i64>) -> Result<bool>;
    async fn remove_scenario_accident(&self, id: i64, accident_id: i64) -> Result<bool>;
    // 地点状态为 COMPLETED 的场景
    async fn list_active_scenarios(&self) -> Result<Vec<Scenario>>;
    // 没有该场景任务的用户（不区分任务状态）
    async fn list_users_without_scenario(&self, scenario_id: i64) -> Result<Vec<User>>;
    // 导出训练器文档所需的数据
    async fn load_scenario_graph(&self, scenario_id: i64) -> Result<Option<ScenarioGraph>>;

    /// 考核任务管理方法
    // 为多个用户分配同一场景，单个事务
    async fn assign_admissions(&self, scenario_id: i64, user_ids: &[i64])
    -> Result<Vec<Admission>>;
    // 为一个用户分配多个场景，单个事务
    async fn assign_scenarios_to_user(
        &self,
        user_id: i64,
        scenario_ids: &[i64],
    ) -> Result<Vec<Admission>>;
    async fn get_admission_by_id(&self, id: i64) -> Result<Option<Admission>>;
    async fn list_admissions(&self) -> Result<Vec<Admission>>;
    async fn list_admissions_by_user(
        &self,
        user_id: i64,
        include_completed: bool,
    ) -> Result<Vec<Admission>>;
    // 评分并持久化（读取 + 修改 + 提交在同一事务内）
    async fn grade_admission(
        &self,
        id: i64,
        rating: Option<String>,
        status: Option<AdmissionStatus>,
    ) -> Result<Option<Admission>>;
    async fn delete_admission(&self, id: i64) -> Result<bool>;
    async fn average_rating_for_user(&self, user_id: i64) -> Result<f64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
