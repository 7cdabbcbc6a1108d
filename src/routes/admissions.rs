use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::admissions::requests::{
    AdmissionResultRequest, AssignAdmissionsRequest, GradeAdmissionRequest, MyAdmissionsParams,
};
use crate::models::users::entities::UserRole;
use crate::services::AdmissionService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AdmissionService 实例
static ADMISSION_SERVICE: Lazy<AdmissionService> = Lazy::new(AdmissionService::new_lazy);

pub async fn list_admissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE.list_all(&req).await
}

pub async fn assign_admissions(
    req: HttpRequest,
    assign_data: web::Json<AssignAdmissionsRequest>,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE
        .assign(assign_data.into_inner(), &req)
        .await
}

pub async fn get_admission(req: HttpRequest, admission_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE.get(admission_id.0, &req).await
}

pub async fn grade_admission(
    req: HttpRequest,
    admission_id: SafeIDI64,
    grade_data: web::Json<GradeAdmissionRequest>,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE
        .grade(admission_id.0, grade_data.into_inner(), &req)
        .await
}

pub async fn delete_admission(
    req: HttpRequest,
    admission_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE.delete(admission_id.0, &req).await
}

pub async fn my_admissions(
    req: HttpRequest,
    query: web::Query<MyAdmissionsParams>,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE.list_mine(query.into_inner(), &req).await
}

pub async fn my_dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE.dashboard(&req).await
}

pub async fn start_admission(
    req: HttpRequest,
    admission_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE.start(admission_id.0, &req).await
}

pub async fn submit_result(
    req: HttpRequest,
    result: web::Json<AdmissionResultRequest>,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE
        .submit_result(result.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_admission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admissions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_admissions))
                    .route(web::post().to(assign_admissions))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            // 学员自己的任务
            .service(web::resource("/my").route(web::get().to(my_admissions)))
            .service(web::resource("/my/dashboard").route(web::get().to(my_dashboard)))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_admission))
                    .route(web::delete().to(delete_admission))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            .service(
                web::resource("/{id}/grade")
                    .route(web::put().to(grade_admission))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            // 归属在业务层检查（本人或教员）
            .service(web::resource("/{id}/start").route(web::post().to(start_admission))),
    );
}

// 训练器回传，不走 JWT，使用共享令牌
pub fn configure_trainer_feed_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admission-result").route("/update", web::post().to(submit_result)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use sea_orm::{ConnectOptions, Database};
    use std::sync::Arc;

    use crate::models::ErrorCode;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    async fn memory_storage() -> Arc<dyn Storage> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.unwrap();
        Arc::new(SeaOrmStorage::with_connection(db).await.unwrap())
    }

    // 直接挂载处理函数，绕过 JWT 与角色中间件
    #[actix_web::test]
    async fn test_delete_missing_admission_returns_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(memory_storage().await))
                .route("/api/v1/admissions/{id}", web::delete().to(delete_admission)),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/v1/admissions/9999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::AdmissionNotFound as i32);
        assert_eq!(body["message"], "Admission not found");
    }
}
