use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::AdmissionService;
use crate::models::{
    ApiResponse, ErrorCode,
    admissions::{
        entities::AdmissionStatus, requests::GradeAdmissionRequest,
        responses::AdmissionResponse,
    },
};
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::validate::validate_rating;

pub async fn grade_admission(
    service: &AdmissionService,
    admission_id: i64,
    grade_data: GradeAdmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    apply_grade(
        &storage,
        admission_id,
        grade_data.rating,
        grade_data.status,
    )
    .await
}

/// 评分并返回修改后的任务；教员接口和训练器回传共用
pub(super) async fn apply_grade(
    storage: &Arc<dyn Storage>,
    admission_id: i64,
    rating: Option<String>,
    status: Option<AdmissionStatus>,
) -> ActixResult<HttpResponse> {
    if let Some(ref rating) = rating
        && let Err(msg) = validate_rating(rating)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RatingInvalid, msg)));
    }

    match storage.grade_admission(admission_id, rating, status).await {
        Ok(Some(admission)) => {
            tracing::info!(
                "Admission {} graded: rating={}, status={}",
                admission.id,
                admission.rating,
                admission.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AdmissionResponse { admission },
                "Admission graded successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AdmissionNotFound,
            "Admission not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AdmissionNotFound)),
    }
}
