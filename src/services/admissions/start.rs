use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdmissionService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    admissions::responses::AdmissionStartResponse,
    export::build_trainer_document,
    users::entities::UserRole,
};
use crate::services::error_response;

/// 导出场景文档并交给训练器启动器
///
/// 学员只能启动自己的任务，教员和管理员不受限制。
pub async fn start_admission(
    service: &AdmissionService,
    admission_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };
    let storage = service.get_storage(request);

    let admission = match storage.get_admission_by_id(admission_id).await {
        Ok(Some(admission)) => admission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AdmissionNotFound,
                "Admission not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, ErrorCode::AdmissionNotFound)),
    };

    if admission.user_id != user.id && user.role() < UserRole::Staff {
        tracing::info!(
            "User {} tried to start admission {} owned by {}",
            user.id,
            admission.id,
            admission.user_id
        );
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Access denied.",
        )));
    }

    let graph = match storage.load_scenario_graph(admission.scenario_id).await {
        Ok(Some(graph)) => graph,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScenarioNotFound,
                "Scenario not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, ErrorCode::ScenarioNotFound)),
    };

    let document = build_trainer_document(admission.id, graph);

    match service.get_launcher(request).launch(&document).await {
        Ok(report) => {
            tracing::info!(
                "Admission {} started by user {} (launched: {})",
                admission.id,
                user.id,
                report.launched
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AdmissionStartResponse {
                    admission_id: admission.id,
                    document_path: report.document_path,
                    launched: report.launched,
                },
                "Trainer started",
            )))
        }
        Err(e) => Ok(error_response(&e, ErrorCode::AdmissionNotFound)),
    }
}
