pub mod accidents;
pub mod create;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::scenarios::requests::{AddAccidentsRequest, ScenarioRequest};
use crate::storage::Storage;

pub struct ScenarioService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScenarioService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create(
        &self,
        scenario_data: ScenarioRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_scenario(self, scenario_data, request).await
    }

    pub async fn list(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_scenarios(self, request).await
    }

    // 地点已完成的场景
    pub async fn list_active(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_active_scenarios(self, request).await
    }

    pub async fn get(&self, scenario_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_scenario(self, scenario_id, request).await
    }

    // 尚未分配该场景的用户
    pub async fn users_without(
        &self,
        scenario_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::users_without_scenario(self, scenario_id, request).await
    }

    pub async fn update(
        &self,
        scenario_id: i64,
        scenario_data: ScenarioRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_scenario(self, scenario_id, scenario_data, request).await
    }

    pub async fn add_accidents(
        &self,
        scenario_id: i64,
        accidents: AddAccidentsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        accidents::add_accidents(self, scenario_id, accidents, request).await
    }

    pub async fn remove_accident(
        &self,
        scenario_id: i64,
        accident_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        accidents::remove_accident(self, scenario_id, accident_id, request).await
    }
}

/// 校验场景请求引用的地点和传感器存在
pub(crate) async fn check_references(
    storage: &Arc<dyn Storage>,
    scenario_data: &ScenarioRequest,
) -> Result<(), HttpResponse> {
    use crate::models::{ApiResponse, ErrorCode};
    use crate::services::error_response;

    if scenario_data.name.trim().is_empty() {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Scenario name must not be empty",
        )));
    }

    if scenario_data.accident_ids.is_empty() {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ScenarioAccidentsRequired,
            "A scenario must have at least one accident",
        )));
    }

    match storage.get_location_by_id(scenario_data.location_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LocationNotFound,
                "Location not found",
            )));
        }
        Err(e) => return Err(error_response(&e, ErrorCode::LocationNotFound)),
    }

    match storage.get_sensor_by_id(scenario_data.sensor_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SensorNotFound,
            "Sensor not found",
        ))),
        Err(e) => Err(error_response(&e, ErrorCode::SensorNotFound)),
    }
}
