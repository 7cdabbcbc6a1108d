use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CatalogService;
use crate::models::{
    ApiResponse, ErrorCode,
    catalog::{
        requests::CreateAccidentRequest,
        responses::{AccidentListResponse, AccidentResponse},
    },
};
use crate::services::error_response;

pub async fn list_accidents(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_accidents().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AccidentListResponse { items },
            "Accident list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AccidentNotFound)),
    }
}

pub async fn list_model_accidents(
    service: &CatalogService,
    model_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_model_by_id(model_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModelNotFound,
                "Model not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, ErrorCode::ModelNotFound)),
    }

    match storage.list_model_accidents(model_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AccidentListResponse { items },
            "Model accidents retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AccidentNotFound)),
    }
}

/// 创建事故并关联到型号
pub async fn create_model_accident(
    service: &CatalogService,
    model_id: i64,
    accident_data: CreateAccidentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if accident_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Accident name must not be empty",
        )));
    }
    let storage = service.get_storage(request);

    match storage
        .create_accident_for_model(model_id, accident_data)
        .await
    {
        Ok(accident) => {
            tracing::info!("Accident {} created for model {}", accident.id, model_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AccidentResponse { accident },
                "Accident created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, ErrorCode::ModelNotFound)),
    }
}

pub async fn unlink_model_accident(
    service: &CatalogService,
    model_id: i64,
    accident_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.unlink_model_accident(model_id, accident_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "Accident unlinked successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccidentNotFound,
            "Accident is not linked to this model",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AccidentNotFound)),
    }
}
