use serde::Deserialize;

use super::entities::AdmissionStatus;

// 教员评分请求
#[derive(Debug, Deserialize)]
pub struct GradeAdmissionRequest {
    pub rating: Option<String>,
    pub status: Option<AdmissionStatus>,
}

// 训练器回传结果
#[derive(Debug, Deserialize)]
pub struct AdmissionResultRequest {
    pub admission_id: i64,
    pub rating: Option<String>,
    pub status: Option<AdmissionStatus>,
}

// 为多个学员分配同一个场景
#[derive(Debug, Deserialize)]
pub struct AssignAdmissionsRequest {
    pub scenario_id: i64,
    pub user_ids: Vec<i64>,
}

// 为一个学员分配多个场景
#[derive(Debug, Deserialize)]
pub struct AssignScenariosRequest {
    pub scenario_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MyAdmissionsParams {
    #[serde(default = "default_include_completed")]
    pub include_completed: bool,
}

fn default_include_completed() -> bool {
    true
}
