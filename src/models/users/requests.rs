use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 学员列表查询参数
#[derive(Debug, Deserialize)]
pub struct TraineeListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 学员列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct TraineeListQuery {
    pub page: i64,
    pub size: i64,
    pub search: Option<String>,
}

impl From<TraineeListParams> for TraineeListQuery {
    fn from(params: TraineeListParams) -> Self {
        let (page, size) = params.pagination.normalized();
        Self {
            page,
            size,
            search: params.search.filter(|s| !s.trim().is_empty()),
        }
    }
}

// 用户资料更新请求
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserProfileRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub patronymic: Option<String>,
    pub division: Option<String>,
}

// 新用户（写入存储层时使用，密码已哈希）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
    pub division: Option<String>,
    pub is_staff: bool,
    pub is_superuser: bool,
}
