use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    admissions::{requests::AssignScenariosRequest, responses::AdmissionListResponse},
};
use crate::services::error_response;

pub async fn assign_scenarios(
    service: &UserService,
    user_id: i64,
    assign_data: AssignScenariosRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if assign_data.scenario_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "At least one scenario must be selected",
        )));
    }

    match storage.get_user_by_id(user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, ErrorCode::UserNotFound)),
    }

    match storage
        .assign_scenarios_to_user(user_id, &assign_data.scenario_ids)
        .await
    {
        Ok(items) => {
            tracing::info!("Assigned {} scenario(s) to user {}", items.len(), user_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AdmissionListResponse { items },
                "Scenarios assigned successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, ErrorCode::ScenarioNotFound)),
    }
}
