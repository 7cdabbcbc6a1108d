use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdmissionService;
use crate::models::{
    ApiResponse, ErrorCode,
    admissions::{requests::AssignAdmissionsRequest, responses::AdmissionListResponse},
};
use crate::services::error_response;

pub async fn assign_admissions(
    service: &AdmissionService,
    assign_data: AssignAdmissionsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if assign_data.user_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "At least one user must be selected",
        )));
    }

    match storage.get_scenario_by_id(assign_data.scenario_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScenarioNotFound,
                "Scenario not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, ErrorCode::ScenarioNotFound)),
    }

    // 整批在一个事务内，任一用户失败则全部回滚
    match storage
        .assign_admissions(assign_data.scenario_id, &assign_data.user_ids)
        .await
    {
        Ok(items) => {
            tracing::info!(
                "Scenario {} assigned to {} user(s)",
                assign_data.scenario_id,
                items.len()
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AdmissionListResponse { items },
                "Admissions assigned successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, ErrorCode::UserNotFound)),
    }
}
