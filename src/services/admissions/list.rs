use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdmissionService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    admissions::{
        entities::last_admission_task,
        requests::MyAdmissionsParams,
        responses::{AdmissionListResponse, AdmissionResponse, DashboardResponse},
    },
};
use crate::services::error_response;

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "Unauthorized access, please login",
    ))
}

pub async fn get_admission(
    service: &AdmissionService,
    admission_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_admission_by_id(admission_id).await {
        Ok(Some(admission)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AdmissionResponse { admission },
            "Admission retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AdmissionNotFound,
            "Admission not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AdmissionNotFound)),
    }
}

pub async fn list_admissions(
    service: &AdmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_admissions().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AdmissionListResponse { items },
            "Admission list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AdmissionNotFound)),
    }
}

pub async fn list_user_admissions(
    service: &AdmissionService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_admissions_by_user(user_id, true).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AdmissionListResponse { items },
            "Admission list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AdmissionNotFound)),
    }
}

pub async fn list_my_admissions(
    service: &AdmissionService,
    params: MyAdmissionsParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request);

    match storage
        .list_admissions_by_user(user_id, params.include_completed)
        .await
    {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AdmissionListResponse { items },
            "Admission list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AdmissionNotFound)),
    }
}

pub async fn my_dashboard(
    service: &AdmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request);

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
        DashboardResponse {
            admissions,
            average_rating,
            last_task,
        },
        "Dashboard retrieved successfully",
    )))
}
