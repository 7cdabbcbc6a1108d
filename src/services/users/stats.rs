use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::admissions::entities::last_admission_task;
use crate::models::users::responses::UserStatsResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn get_user_stats(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, ErrorCode::UserNotFound)),
    };

    let admissions = match storage.list_admissions_by_user(user_id, true).await {
        Ok(admissions) => admissions,
        Err(e) => return Ok(error_response(&e, ErrorCode::AdmissionNotFound)),
    };

    let average_rating = match storage.average_rating_for_user(user_id).await {
        Ok(average) => average,
        Err(e) => return Ok(error_response(&e, ErrorCode::AdmissionNotFound)),
    };

    let last_task = last_admission_task(&admissions);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        UserStatsResponse {
            user,
            admissions,
            average_rating,
            last_task,
        },
        "User statistics retrieved successfully",
    )))
}
