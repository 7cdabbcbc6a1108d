use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CatalogService;
use crate::models::{
    ApiResponse, ErrorCode,
    catalog::{
        requests::{CreateModelRequest, UpdateModelRequest},
        responses::{ModelListResponse, ModelResponse, SensorTypeListResponse},
    },
};
use crate::services::error_response;

/// 传感器类型按名称创建或复用
pub async fn create_model(
    service: &CatalogService,
    model_data: CreateModelRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if model_data.sensor_type.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Sensor type name must not be empty",
        )));
    }
    let storage = service.get_storage(request);

    match storage.create_model(model_data).await {
        Ok(model) => {
            tracing::info!("Model {} created ({})", model.id, model.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ModelResponse { model },
                "Model created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, ErrorCode::ModelNotFound)),
    }
}

pub async fn list_models(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_models().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModelListResponse { items },
            "Model list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::ModelNotFound)),
    }
}

pub async fn get_model(
    service: &CatalogService,
    model_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_model_by_id(model_id).await {
        Ok(Some(model)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModelResponse { model },
            "Model retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModelNotFound,
            "Model not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::ModelNotFound)),
    }
}

pub async fn update_model(
    service: &CatalogService,
    model_id: i64,
    model_data: UpdateModelRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .update_model_specification(model_id, model_data.specification)
        .await
    {
        Ok(Some(model)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModelResponse { model },
            "Model updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModelNotFound,
            "Model not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::ModelNotFound)),
    }
}

pub async fn list_sensor_types(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_sensor_types().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SensorTypeListResponse { items },
            "Sensor types retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::NotFound)),
    }
}
