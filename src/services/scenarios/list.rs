use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScenarioService;
use crate::models::{ApiResponse, ErrorCode, scenarios::responses::ScenarioListResponse};
use crate::services::error_response;

pub async fn list_scenarios(
    service: &ScenarioService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_scenarios().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScenarioListResponse { items },
            "Scenario list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::ScenarioNotFound)),
    }
}

pub async fn list_active_scenarios(
    service: &ScenarioService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_active_scenarios().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScenarioListResponse { items },
            "Active scenarios retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::ScenarioNotFound)),
    }
}
