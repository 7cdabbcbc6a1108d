//! 训练器场景文档
//!
//! 文档结构固定，由外部训练器进程读取。

use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::entities::{Accident, InstrumentModel, Sensor};
use super::scenarios::entities::Scenario;
use crate::utils::slugify;

/// 导出一个场景所需的完整数据，由存储层逐步查询得到
#[derive(Debug, Clone)]
pub struct ScenarioGraph {
    pub scenario: Scenario,
    pub sensor: Sensor,
    pub model: InstrumentModel,
    pub accidents: Vec<Accident>,
}

#[derive(Debug, Serialize)]
pub struct TrainerDocument {
    pub response: TrainerResponse,
}

#[derive(Debug, Serialize)]
pub struct TrainerResponse {
    pub id: i64,
    pub status: u16,
    pub scenario: ExportedScenario,
}

#[derive(Debug, Serialize)]
pub struct ExportedScenario {
    pub id: i64,
    pub name: String,
    pub sensor: ExportedSensor,
    pub accidents: Vec<ExportedAccident>,
}

#[derive(Debug, Serialize)]
pub struct ExportedSensor {
    pub id: i64,
    pub name: String,
    #[serde(rename = "KKS")]
    pub kks: String,
    pub model: ExportedModel,
}

#[derive(Debug, Serialize)]
pub struct ExportedModel {
    pub id: i64,
    pub name: String,
    pub specification: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct ExportedAccident {
    pub name: String,
    pub mechanical_accident: bool,
    pub change_value: BTreeMap<String, serde_json::Value>,
}

/// 组装训练器文档；规格参数名规范化，事故参数名保持原样，事故按 id 排序
pub fn build_trainer_document(admission_id: i64, graph: ScenarioGraph) -> TrainerDocument {
    let ScenarioGraph {
        scenario,
        sensor,
        model,
        mut accidents,
    } = graph;

    accidents.sort_by_key(|a| a.id);

    let specification = model
        .specification
        .into_iter()
        .map(|(key, value)| (slugify(&key), value))
        .collect();

    TrainerDocument {
        response: TrainerResponse {
            id: admission_id,
            status: 200,
            scenario: ExportedScenario {
                id: scenario.id,
                name: scenario.name,
                sensor: ExportedSensor {
                    id: sensor.id,
                    name: sensor.name,
                    kks: sensor.kks,
                    model: ExportedModel {
                        id: model.id,
                        name: model.name,
                        specification,
                    },
                },
                accidents: accidents
                    .into_iter()
                    .map(|a| ExportedAccident {
                        name: a.name,
                        mechanical_accident: a.mechanical_accident,
                        change_value: a.change_value,
                    })
                    .collect(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn graph() -> ScenarioGraph {
        ScenarioGraph {
            scenario: Scenario {
                id: 3,
                name: "Pump overheat".into(),
                location_id: 1,
                sensor_id: 5,
            },
            sensor: Sensor {
                id: 5,
                name: "TT-101".into(),
                kks: "10LAB10CT001".into(),
                model_id: 8,
            },
            model: InstrumentModel {
                id: 8,
                name: "Thermometer".into(),
                sensor_type_id: 2,
                specification: BTreeMap::from([("Max Temp".to_string(), "100 C".to_string())]),
            },
            accidents: vec![
                Accident {
                    id: 9,
                    name: "Drift".into(),
                    mechanical_accident: false,
                    change_value: BTreeMap::new(),
                },
                Accident {
                    id: 4,
                    name: "Leak".into(),
                    mechanical_accident: true,
                    change_value: BTreeMap::from([("Flow Rate".to_string(), json!("0.5"))]),
                },
            ],
        }
    }

    #[test]
    fn test_document_shape() {
        let value = serde_json::to_value(build_trainer_document(42, graph())).unwrap();
        let response = &value["response"];
        assert_eq!(response["id"], 42);
        assert_eq!(response["status"], 200);
        assert_eq!(response["scenario"]["sensor"]["KKS"], "10LAB10CT001");
        assert_eq!(
            response["scenario"]["sensor"]["model"]["specification"]["max_temp"],
            "100 C"
        );
        assert_eq!(response["scenario"]["accidents"][0]["name"], "Leak");
    }

    #[test]
    fn test_change_value_keys_untouched() {
        let value = serde_json::to_value(build_trainer_document(1, graph())).unwrap();
        let accident = &value["response"]["scenario"]["accidents"][0];
        assert_eq!(accident["change_value"]["Flow Rate"], "0.5");
        assert_eq!(accident["mechanical_accident"], true);
    }

    #[test]
    fn test_deterministic_output() {
        let a = serde_json::to_string(&build_trainer_document(1, graph())).unwrap();
        let b = serde_json::to_string(&build_trainer_document(1, graph())).unwrap();
        assert_eq!(a, b);
    }
}
