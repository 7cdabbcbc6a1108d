use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdmissionService;
use super::grade::apply_grade;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode, admissions::requests::AdmissionResultRequest};

pub const TRAINER_TOKEN_HEADER: &str = "X-Trainer-Token";

/// 训练器回传成绩，使用共享令牌认证
pub async fn submit_result(
    service: &AdmissionService,
    result: AdmissionResultRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    if !config.result_feed_enabled() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::TrainerFeedDisabled,
            "Trainer result feed is disabled",
        )));
    }

    let presented = request
        .headers()
        .get(TRAINER_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    if presented != Some(config.trainer.result_token.as_str()) {
        tracing::info!(
            "Rejected trainer result for admission {}: bad token",
            result.admission_id
        );
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Invalid trainer token",
        )));
    }

    let storage = service.get_storage(request);
    apply_grade(&storage, result.admission_id, result.rating, result.status).await
}
