use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 地点状态，只有 COMPLETED 的地点参与活动场景
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationStatus {
    #[default]
    Developing,
    Inactive,
    Completed,
}

impl LocationStatus {
    pub const DEVELOPING: &'static str = "DEVELOPING";
    pub const INACTIVE: &'static str = "INACTIVE";
    pub const COMPLETED: &'static str = "COMPLETED";

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationStatus::Developing => Self::DEVELOPING,
            LocationStatus::Inactive => Self::INACTIVE,
            LocationStatus::Completed => Self::COMPLETED,
        }
    }
}

impl std::fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LocationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::DEVELOPING => Ok(LocationStatus::Developing),
            Self::INACTIVE => Ok(LocationStatus::Inactive),
            Self::COMPLETED => Ok(LocationStatus::Completed),
            _ => Err(format!("Invalid location status: {s}")),
        }
    }
}

// 地点
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub prefab: Option<String>,
    pub status: LocationStatus,
}

// 传感器类型
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorType {
    pub id: i64,
    pub name: String,
}

/// 仪表型号，名称取自其传感器类型
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstrumentModel {
    pub id: i64,
    pub name: String,
    pub sensor_type_id: i64,
    /// 参数名 -> "数值 单位"
    pub specification: BTreeMap<String, String>,
}

// 传感器
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sensor {
    pub id: i64,
    pub name: String,
    pub kks: String,
    pub model_id: i64,
}

/// 事故（故障定义）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Accident {
    pub id: i64,
    pub name: String,
    pub mechanical_accident: bool,
    /// 参数名 -> 变化后的值，原样导出
    pub change_value: BTreeMap<String, serde_json::Value>,
}
