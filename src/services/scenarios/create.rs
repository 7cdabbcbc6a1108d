use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScenarioService, check_references};
use crate::models::{
    ApiResponse, ErrorCode,
    scenarios::{requests::ScenarioRequest, responses::ScenarioResponse},
};
use crate::services::error_response;

pub async fn create_scenario(
    service: &ScenarioService,
    scenario_data: ScenarioRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_references(&storage, &scenario_data).await {
        return Ok(response);
    }

    let scenario = match storage.create_scenario(scenario_data).await {
        Ok(scenario) => scenario,
        Err(e) => return Ok(error_response(&e, ErrorCode::AccidentNotFound)),
    };

    tracing::info!("Scenario {} created: {}", scenario.id, scenario.name);

    match storage.get_scenario_detail(scenario.id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Created().json(ApiResponse::success(
            ScenarioResponse { scenario: detail },
            "Scenario created successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScenarioNotFound,
            "Scenario not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::ScenarioNotFound)),
    }
}
