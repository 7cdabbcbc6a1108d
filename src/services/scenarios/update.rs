use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScenarioService, check_references};
use crate::models::{
    ApiResponse, ErrorCode,
    scenarios::{requests::ScenarioRequest, responses::ScenarioResponse},
};
use crate::services::error_response;

/// 替换名称、地点、传感器和全部事故
pub async fn update_scenario(
    service: &ScenarioService,
    scenario_id: i64,
    scenario_data: ScenarioRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_references(&storage, &scenario_data).await {
        return Ok(response);
    }

    match storage.update_scenario(scenario_id, scenario_data).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScenarioNotFound,
                "Scenario not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, ErrorCode::AccidentNotFound)),
    }

    match storage.get_scenario_detail(scenario_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScenarioResponse { scenario: detail },
            "Scenario updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScenarioNotFound,
            "Scenario not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::ScenarioNotFound)),
    }
}
