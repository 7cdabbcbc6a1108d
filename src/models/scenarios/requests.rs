use serde::Deserialize;

// 创建/更新场景，事故列表不能为空
#[derive(Debug, Deserialize)]
pub struct ScenarioRequest {
    pub name: String,
    pub location_id: i64,
    pub sensor_id: i64,
    pub accident_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AddAccidentsRequest {
    pub accident_ids: Vec<i64>,
}
