use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdmissionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn delete_admission(
    service: &AdmissionService,
    admission_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_admission(admission_id).await {
        Ok(true) => {
            tracing::info!("Admission {} deleted", admission_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Admission deleted successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AdmissionNotFound,
            "Admission not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AdmissionNotFound)),
    }
}
