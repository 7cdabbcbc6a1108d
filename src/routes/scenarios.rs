use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::scenarios::requests::{AddAccidentsRequest, ScenarioRequest};
use crate::models::users::entities::UserRole;
use crate::services::ScenarioService;
use crate::utils::{SafeAccidentIdI64, SafeIDI64};

// 懒加载的全局 ScenarioService 实例
static SCENARIO_SERVICE: Lazy<ScenarioService> = Lazy::new(ScenarioService::new_lazy);

pub async fn list_scenarios(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCENARIO_SERVICE.list(&req).await
}

pub async fn list_active_scenarios(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCENARIO_SERVICE.list_active(&req).await
}

pub async fn get_scenario(req: HttpRequest, scenario_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SCENARIO_SERVICE.get(scenario_id.0, &req).await
}

pub async fn users_without_scenario(
    req: HttpRequest,
    scenario_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SCENARIO_SERVICE.users_without(scenario_id.0, &req).await
}

pub async fn create_scenario(
    req: HttpRequest,
    scenario_data: web::Json<ScenarioRequest>,
) -> ActixResult<HttpResponse> {
    SCENARIO_SERVICE
        .create(scenario_data.into_inner(), &req)
        .await
}

pub async fn update_scenario(
    req: HttpRequest,
    scenario_id: SafeIDI64,
    scenario_data: web::Json<ScenarioRequest>,
) -> ActixResult<HttpResponse> {
    SCENARIO_SERVICE
        .update(scenario_id.0, scenario_data.into_inner(), &req)
        .await
}

pub async fn add_accidents(
    req: HttpRequest,
    scenario_id: SafeIDI64,
    accidents: web::Json<AddAccidentsRequest>,
) -> ActixResult<HttpResponse> {
    SCENARIO_SERVICE
        .add_accidents(scenario_id.0, accidents.into_inner(), &req)
        .await
}

pub async fn remove_accident(
    req: HttpRequest,
    scenario_id: SafeIDI64,
    accident_id: SafeAccidentIdI64,
) -> ActixResult<HttpResponse> {
    SCENARIO_SERVICE
        .remove_accident(scenario_id.0, accident_id.0, &req)
        .await
}

// 配置路由
pub fn configure_scenario_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/scenarios")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_scenarios))
                    .route(
                        web::post()
                            .to(create_scenario)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            .service(
                web::resource("/active")
                    .route(web::get().to(list_active_scenarios))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_scenario))
                    .route(
                        web::put()
                            .to(update_scenario)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            .service(
                web::resource("/{id}/users-without")
                    .route(web::get().to(users_without_scenario))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            .service(
                web::resource("/{id}/accidents")
                    .route(web::post().to(add_accidents))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/{id}/accidents/{accident_id}")
                    .route(web::delete().to(remove_accident))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    );
}
