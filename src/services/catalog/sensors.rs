use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CatalogService;
use crate::models::{
    ApiResponse, ErrorCode,
    catalog::{
        requests::SensorRequest,
        responses::{SensorListResponse, SensorResponse},
    },
};
use crate::services::error_response;

fn check_sensor_request(sensor_data: &SensorRequest) -> Result<(), HttpResponse> {
    if sensor_data.name.trim().is_empty() || sensor_data.kks.trim().is_empty() {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Sensor name and KKS must not be empty",
        )));
    }
    Ok(())
}

pub async fn create_sensor(
    service: &CatalogService,
    sensor_data: SensorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = check_sensor_request(&sensor_data) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    match storage.create_sensor(sensor_data).await {
        Ok(sensor) => {
            tracing::info!("Sensor {} created: {}", sensor.id, sensor.kks);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SensorResponse { sensor },
                "Sensor created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, ErrorCode::ModelNotFound)),
    }
}

pub async fn list_sensors(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_sensors().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SensorListResponse { items },
            "Sensor list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::SensorNotFound)),
    }
}

pub async fn get_sensor(
    service: &CatalogService,
    sensor_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_sensor_by_id(sensor_id).await {
        Ok(Some(sensor)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SensorResponse { sensor },
            "Sensor retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SensorNotFound,
            "Sensor not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::SensorNotFound)),
    }
}

pub async fn update_sensor(
    service: &CatalogService,
    sensor_id: i64,
    sensor_data: SensorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = check_sensor_request(&sensor_data) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    match storage.update_sensor(sensor_id, sensor_data).await {
        Ok(Some(sensor)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SensorResponse { sensor },
            "Sensor updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SensorNotFound,
            "Sensor not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::ModelNotFound)),
    }
}
