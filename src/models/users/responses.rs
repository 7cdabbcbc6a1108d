use super::entities::User;
use crate::models::admissions::entities::Admission;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 用户响应
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

// 用户列表响应
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}

// 用户统计：资料 + 任务 + 平均分
#[derive(Debug, Serialize)]
pub struct UserStatsResponse {
    pub user: User,
    pub admissions: Vec<Admission>,
    pub average_rating: f64,
    pub last_task: Option<Admission>,
}
