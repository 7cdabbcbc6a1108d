use serde::{Deserialize, Serialize};

use crate::models::catalog::entities::{Accident, Location, Sensor};

// 场景：一个地点 + 一个传感器 + 一组事故
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub id: i64,
    pub name: String,
    pub location_id: i64,
    pub sensor_id: i64,
}

// 场景详情
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioDetail {
    #[serde(flatten)]
    pub scenario: Scenario,
    pub location: Location,
    pub sensor: Sensor,
    pub accidents: Vec<Accident>,
}
