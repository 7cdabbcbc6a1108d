use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::catalog::requests::{
    CreateAccidentRequest, CreateModelRequest, LocationRequest, SensorRequest, UpdateModelRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CatalogService;
use crate::utils::{SafeAccidentIdI64, SafeIDI64};

// 懒加载的全局 CatalogService 实例
static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

// 地点
pub async fn list_locations(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_locations(&req).await
}

pub async fn create_location(
    req: HttpRequest,
    location_data: web::Json<LocationRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .create_location(location_data.into_inner(), &req)
        .await
}

pub async fn get_location(req: HttpRequest, location_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.get_location(location_id.0, &req).await
}

pub async fn update_location(
    req: HttpRequest,
    location_id: SafeIDI64,
    location_data: web::Json<LocationRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_location(location_id.0, location_data.into_inner(), &req)
        .await
}

pub async fn list_location_sensors(
    req: HttpRequest,
    location_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .list_location_sensors(location_id.0, &req)
        .await
}

// 型号
pub async fn list_models(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_models(&req).await
}

pub async fn create_model(
    req: HttpRequest,
    model_data: web::Json<CreateModelRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .create_model(model_data.into_inner(), &req)
        .await
}

pub async fn get_model(req: HttpRequest, model_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.get_model(model_id.0, &req).await
}

pub async fn update_model(
    req: HttpRequest,
    model_id: SafeIDI64,
    model_data: web::Json<UpdateModelRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_model(model_id.0, model_data.into_inner(), &req)
        .await
}

pub async fn list_model_accidents(
    req: HttpRequest,
    model_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_model_accidents(model_id.0, &req).await
}

pub async fn create_model_accident(
    req: HttpRequest,
    model_id: SafeIDI64,
    accident_data: web::Json<CreateAccidentRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .create_model_accident(model_id.0, accident_data.into_inner(), &req)
        .await
}

pub async fn unlink_model_accident(
    req: HttpRequest,
    model_id: SafeIDI64,
    accident_id: SafeAccidentIdI64,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .unlink_model_accident(model_id.0, accident_id.0, &req)
        .await
}

pub async fn list_accidents(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_accidents(&req).await
}

pub async fn list_sensor_types(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_sensor_types(&req).await
}

// 传感器
pub async fn list_sensors(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_sensors(&req).await
}

pub async fn create_sensor(
    req: HttpRequest,
    sensor_data: web::Json<SensorRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .create_sensor(sensor_data.into_inner(), &req)
        .await
}

pub async fn get_sensor(req: HttpRequest, sensor_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.get_sensor(sensor_id.0, &req).await
}

pub async fn update_sensor(
    req: HttpRequest,
    sensor_id: SafeIDI64,
    sensor_data: web::Json<SensorRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_sensor(sensor_id.0, sensor_data.into_inner(), &req)
        .await
}

// 配置路由：教员可读，管理员可写
pub fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
    let admin_only = || middlewares::RequireRole::new_any(UserRole::admin_roles());

    cfg.service(
        web::scope("/api/v1/catalog")
            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/locations")
                    .route(web::get().to(list_locations))
                    .route(web::post().to(create_location).wrap(admin_only())),
            )
            .service(
                web::resource("/locations/{id}")
                    .route(web::get().to(get_location))
                    .route(web::put().to(update_location).wrap(admin_only())),
            )
            .service(
                web::resource("/locations/{id}/sensors")
                    .route(web::get().to(list_location_sensors)),
            )
            .service(
                web::resource("/models")
                    .route(web::get().to(list_models))
                    .route(web::post().to(create_model).wrap(admin_only())),
            )
            .service(
                web::resource("/models/{id}")
                    .route(web::get().to(get_model))
                    .route(web::put().to(update_model).wrap(admin_only())),
            )
            .service(
                web::resource("/models/{id}/accidents")
                    .route(web::get().to(list_model_accidents))
                    .route(web::post().to(create_model_accident).wrap(admin_only())),
            )
            .service(
                web::resource("/models/{id}/accidents/{accident_id}")
                    .route(web::delete().to(unlink_model_accident).wrap(admin_only())),
            )
            .service(web::resource("/accidents").route(web::get().to(list_accidents)))
            .service(web::resource("/sensor-types").route(web::get().to(list_sensor_types)))
            .service(
                web::resource("/sensors")
                    .route(web::get().to(list_sensors))
                    .route(web::post().to(create_sensor).wrap(admin_only())),
            )
            .service(
                web::resource("/sensors/{id}")
                    .route(web::get().to(get_sensor))
                    .route(web::put().to(update_sensor).wrap(admin_only())),
            ),
    );
}
