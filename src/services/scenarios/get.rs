use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScenarioService;
use crate::models::{
    ApiResponse, ErrorCode,
    scenarios::responses::{ScenarioResponse, UsersWithoutScenarioResponse},
};
use crate::services::error_response;

pub async fn get_scenario(
    service: &ScenarioService,
    scenario_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_scenario_detail(scenario_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScenarioResponse { scenario: detail },
            "Scenario retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScenarioNotFound,
            "Scenario not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::ScenarioNotFound)),
    }
}

pub async fn users_without_scenario(
    service: &ScenarioService,
    scenario_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_scenario_by_id(scenario_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScenarioNotFound,
                "Scenario not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, ErrorCode::ScenarioNotFound)),
    }

    match storage.list_users_without_scenario(scenario_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UsersWithoutScenarioResponse { scenario_id, items },
            "Users retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::UserNotFound)),
    }
}
