use serde::Serialize;

use super::entities::Admission;

#[derive(Debug, Serialize)]
pub struct AdmissionResponse {
    pub admission: Admission,
}

#[derive(Debug, Serialize)]
pub struct AdmissionListResponse {
    pub items: Vec<Admission>,
}

// 学员首页
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub admissions: Vec<Admission>,
    pub average_rating: f64,
    pub last_task: Option<Admission>,
}

#[derive(Debug, Serialize)]
pub struct AdmissionStartResponse {
    pub admission_id: i64,
    pub document_path: String,
    /// 是否实际启动了训练器进程
    pub launched: bool,
}
