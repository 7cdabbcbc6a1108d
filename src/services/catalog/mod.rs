//! 目录管理：地点、型号、传感器、事故

pub mod accidents;
pub mod locations;
pub mod models;
pub mod sensors;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::catalog::requests::{
    CreateAccidentRequest, CreateModelRequest, LocationRequest, SensorRequest, UpdateModelRequest,
};
use crate::storage::Storage;

pub struct CatalogService {
    storage: Option<Arc<dyn Storage>>,
}

impl CatalogService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 地点
    pub async fn create_location(
        &self,
        location_data: LocationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        locations::create_location(self, location_data, request).await
    }

    pub async fn list_locations(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        locations::list_locations(self, request).await
    }

    pub async fn get_location(
        &self,
        location_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        locations::get_location(self, location_id, request).await
    }

    pub async fn update_location(
        &self,
        location_id: i64,
        location_data: LocationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        locations::update_location(self, location_id, location_data, request).await
    }

    pub async fn list_location_sensors(
        &self,
        location_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        locations::list_location_sensors(self, location_id, request).await
    }

    // 型号
    pub async fn create_model(
        &self,
        model_data: CreateModelRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        models::create_model(self, model_data, request).await
    }

    pub async fn list_models(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        models::list_models(self, request).await
    }

    pub async fn get_model(&self, model_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        models::get_model(self, model_id, request).await
    }

    pub async fn update_model(
        &self,
        model_id: i64,
        model_data: UpdateModelRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        models::update_model(self, model_id, model_data, request).await
    }

    pub async fn list_model_accidents(
        &self,
        model_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        accidents::list_model_accidents(self, model_id, request).await
    }

    pub async fn create_model_accident(
        &self,
        model_id: i64,
        accident_data: CreateAccidentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        accidents::create_model_accident(self, model_id, accident_data, request).await
    }

    pub async fn unlink_model_accident(
        &self,
        model_id: i64,
        accident_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        accidents::unlink_model_accident(self, model_id, accident_id, request).await
    }

    pub async fn list_accidents(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        accidents::list_accidents(self, request).await
    }

    pub async fn list_sensor_types(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        models::list_sensor_types(self, request).await
    }

    // 传感器
    pub async fn create_sensor(
        &self,
        sensor_data: SensorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sensors::create_sensor(self, sensor_data, request).await
    }

    pub async fn list_sensors(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        sensors::list_sensors(self, request).await
    }

    pub async fn get_sensor(&self, sensor_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        sensors::get_sensor(self, sensor_id, request).await
    }

    pub async fn update_sensor(
        &self,
        sensor_id: i64,
        sensor_data: SensorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sensors::update_sensor(self, sensor_id, sensor_data, request).await
    }
}
