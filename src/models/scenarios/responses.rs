use serde::Serialize;

use super::entities::{Scenario, ScenarioDetail};
use crate::models::users::entities::User;

#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    pub scenario: ScenarioDetail,
}

#[derive(Debug, Serialize)]
pub struct ScenarioListResponse {
    pub items: Vec<Scenario>,
}

// 尚未分配该场景的用户
#[derive(Debug, Serialize)]
pub struct UsersWithoutScenarioResponse {
    pub scenario_id: i64,
    pub items: Vec<User>,
}
