//! 预导入模块，方便使用

pub use super::accidents::{
    ActiveModel as AccidentActiveModel, Entity as Accidents, Model as AccidentModel,
};
pub use super::admissions::{
    ActiveModel as AdmissionActiveModel, Entity as Admissions, Model as AdmissionModel,
};
pub use super::locations::{
    ActiveModel as LocationActiveModel, Entity as Locations, Model as LocationModel,
};
pub use super::model_accidents::{
    ActiveModel as ModelAccidentActiveModel, Entity as ModelAccidents,
};
pub use super::models::{
    ActiveModel as InstrumentModelActiveModel, Entity as InstrumentModels,
    Model as InstrumentModelModel,
};
pub use super::scenario_accidents::{
    ActiveModel as ScenarioAccidentActiveModel, Entity as ScenarioAccidents,
};
pub use super::scenarios::{
    ActiveModel as ScenarioActiveModel, Entity as Scenarios, Model as ScenarioModel,
};
pub use super::sensor_locations::{
    ActiveModel as SensorLocationActiveModel, Entity as SensorLocations,
};
pub use super::sensor_types::{
    ActiveModel as SensorTypeActiveModel, Entity as SensorTypes, Model as SensorTypeModel,
};
pub use super::sensors::{ActiveModel as SensorActiveModel, Entity as Sensors, Model as SensorModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
