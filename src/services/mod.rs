pub mod admissions;
pub mod auth;
pub mod catalog;
pub mod scenarios;
pub mod users;

pub use admissions::AdmissionService;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use scenarios::ScenarioService;
pub use users::UserService;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::{ErrorClass, TrainerError};
use crate::models::{ApiResponse, ErrorCode};

pub(crate) const STORAGE_FAILURE_MESSAGE: &str = "Storage problem, please try again later";

/// 把领域/存储错误翻译成响应
///
/// `not_found` 为该资源的业务错误码；存储和未预期的错误不向外暴露细节。
pub(crate) fn error_response(err: &TrainerError, not_found: ErrorCode) -> HttpResponse {
    match err.class() {
        ErrorClass::NotFound => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(not_found, err.message()))
        }
        ErrorClass::Validation => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, err.message())),
        ErrorClass::Storage => {
            error!("{}", err.format_simple());
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StorageFailure,
                STORAGE_FAILURE_MESSAGE,
            ))
        }
        ErrorClass::Io => {
            error!("{}", err.format_simple());
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::TrainerLaunchFailed,
                "Failed to export the scenario or launch the trainer",
            ))
        }
        ErrorClass::Unexpected => {
            error!("Unexpected error: {}", err.format_simple());
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                STORAGE_FAILURE_MESSAGE,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_error_classes_map_to_status() {
        let cases = [
            (TrainerError::not_found("x"), StatusCode::NOT_FOUND),
            (TrainerError::validation("x"), StatusCode::BAD_REQUEST),
            (
                TrainerError::database_operation("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                TrainerError::trainer_launch("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                TrainerError::serialization("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(
                error_response(&err, ErrorCode::NotFound).status(),
                status,
                "{err}"
            );
        }
    }
}
