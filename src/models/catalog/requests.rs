use std::collections::BTreeMap;

use serde::Deserialize;

use super::entities::LocationStatus;

// 创建/更新地点，传感器列表不能为空
#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    pub name: String,
    #[serde(default)]
    pub status: LocationStatus,
    pub prefab: Option<String>,
    pub sensor_ids: Vec<i64>,
}

// 创建型号；传感器类型按名称创建或复用
#[derive(Debug, Deserialize)]
pub struct CreateModelRequest {
    pub sensor_type: String,
    pub specification: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateModelRequest {
    pub specification: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct SensorRequest {
    pub name: String,
    pub kks: String,
    pub model_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateAccidentRequest {
    pub name: String,
    #[serde(default)]
    pub mechanical_accident: bool,
    #[serde(default)]
    pub change_value: BTreeMap<String, serde_json::Value>,
}
