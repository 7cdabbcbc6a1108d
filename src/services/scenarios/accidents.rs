use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScenarioService;
use crate::models::{ApiResponse, ErrorCode, scenarios::requests::AddAccidentsRequest};
use crate::services::error_response;

pub async fn add_accidents(
    service: &ScenarioService,
    scenario_id: i64,
    accidents: AddAccidentsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if accidents.accident_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ScenarioAccidentsRequired,
            "At least one accident must be selected",
        )));
    }

    match storage
        .add_scenario_accidents(scenario_id, accidents.accident_ids)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "Accidents added successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScenarioNotFound,
            "Scenario not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AccidentNotFound)),
    }
}

pub async fn remove_accident(
    service: &ScenarioService,
    scenario_id: i64,
    accident_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .remove_scenario_accident(scenario_id, accident_id)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "Accident removed successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccidentNotFound,
            "Accident is not linked to this scenario",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AccidentNotFound)),
    }
}
