use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::admissions::requests::AssignScenariosRequest;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{TraineeListParams, UpdateUserProfileRequest};
use crate::services::{AdmissionService, UserService};
use crate::utils::SafeIDI64;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);
static ADMISSION_SERVICE: Lazy<AdmissionService> = Lazy::new(AdmissionService::new_lazy);

// HTTP处理程序
pub async fn list_trainees(
    req: HttpRequest,
    query: web::Query<TraineeListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_trainees(query.into_inner(), &req).await
}

pub async fn get_user_stats(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user_stats(user_id.0, &req).await
}

pub async fn update_profile(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateUserProfileRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_profile(user_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn list_user_admissions(
    req: HttpRequest,
    user_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE.list_for_user(user_id.0, &req).await
}

pub async fn assign_scenarios(
    req: HttpRequest,
    user_id: SafeIDI64,
    assign_data: web::Json<AssignScenariosRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .assign_scenarios(user_id.0, assign_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_trainees))
                    .route("/{id}", web::get().to(get_user_stats))
                    .route("/{id}", web::put().to(update_profile))
                    .route("/{id}/admissions", web::get().to(list_user_admissions))
                    .route("/{id}/admissions", web::post().to(assign_scenarios)),
            ),
    );
}
