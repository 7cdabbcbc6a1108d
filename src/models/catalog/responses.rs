use serde::Serialize;

use super::entities::{Accident, InstrumentModel, Location, Sensor, SensorType};

#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub location: Location,
    pub sensor_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct LocationListResponse {
    pub items: Vec<Location>,
}

#[derive(Debug, Serialize)]
pub struct SensorListResponse {
    pub items: Vec<Sensor>,
}

#[derive(Debug, Serialize)]
pub struct SensorResponse {
    pub sensor: Sensor,
}

#[derive(Debug, Serialize)]
pub struct ModelListResponse {
    pub items: Vec<InstrumentModel>,
}

#[derive(Debug, Serialize)]
pub struct ModelResponse {
    pub model: InstrumentModel,
}

#[derive(Debug, Serialize)]
pub struct AccidentListResponse {
    pub items: Vec<Accident>,
}

#[derive(Debug, Serialize)]
pub struct AccidentResponse {
    pub accident: Accident,
}

#[derive(Debug, Serialize)]
pub struct SensorTypeListResponse {
    pub items: Vec<SensorType>,
}
