pub mod admissions;
pub mod auth;
pub mod catalog;
pub mod common;
pub mod export;
pub mod menu;
pub mod scenarios;
pub mod users;

pub use common::{ApiResponse, ErrorCode, PaginationInfo, PaginationQuery};

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
