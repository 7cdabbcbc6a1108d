use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CatalogService;
use crate::models::{
    ApiResponse, ErrorCode,
    catalog::{
        entities::Location,
        requests::LocationRequest,
        responses::{LocationListResponse, LocationResponse, SensorListResponse},
    },
};
use crate::services::error_response;
use crate::storage::Storage;

fn check_location_request(location_data: &LocationRequest) -> Result<(), HttpResponse> {
    if location_data.name.trim().is_empty() {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Location name must not be empty",
        )));
    }
    if location_data.sensor_ids.is_empty() {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::LocationSensorsRequired,
            "A location must have at least one sensor",
        )));
    }
    Ok(())
}

async fn location_response(
    storage: &dyn Storage,
    location: Location,
    message: &str,
    created: bool,
) -> HttpResponse {
    match storage.list_location_sensors(location.id).await {
        Ok(sensors) => {
            let body = ApiResponse::success(
                LocationResponse {
                    location,
                    sensor_ids: sensors.into_iter().map(|s| s.id).collect(),
                },
                message,
            );
            if created {
                HttpResponse::Created().json(body)
            } else {
                HttpResponse::Ok().json(body)
            }
        }
        Err(e) => error_response(&e, ErrorCode::LocationNotFound),
    }
}

pub async fn create_location(
    service: &CatalogService,
    location_data: LocationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = check_location_request(&location_data) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    match storage.create_location(location_data).await {
        Ok(location) => {
            tracing::info!("Location {} created: {}", location.id, location.name);
            Ok(location_response(
                storage.as_ref(),
                location,
                "Location created successfully",
                true,
            )
            .await)
        }
        Err(e) => Ok(error_response(&e, ErrorCode::SensorNotFound)),
    }
}

pub async fn list_locations(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_locations().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            LocationListResponse { items },
            "Location list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::LocationNotFound)),
    }
}

pub async fn get_location(
    service: &CatalogService,
    location_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_location_by_id(location_id).await {
        Ok(Some(location)) => Ok(location_response(
            storage.as_ref(),
            location,
            "Location retrieved successfully",
            false,
        )
        .await),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LocationNotFound,
            "Location not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::LocationNotFound)),
    }
}

pub async fn update_location(
    service: &CatalogService,
    location_id: i64,
    location_data: LocationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = check_location_request(&location_data) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    match storage.update_location(location_id, location_data).await {
        Ok(Some(location)) => Ok(location_response(
            storage.as_ref(),
            location,
            "Location updated successfully",
            false,
        )
        .await),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LocationNotFound,
            "Location not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::SensorNotFound)),
    }
}

pub async fn list_location_sensors(
    service: &CatalogService,
    location_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_location_by_id(location_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LocationNotFound,
                "Location not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, ErrorCode::LocationNotFound)),
    }

    match storage.list_location_sensors(location_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SensorListResponse { items },
            "Location sensors retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::LocationNotFound)),
    }
}
