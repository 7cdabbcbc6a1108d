use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ErrorCode;

/// 响应信封：`code` 为 0 表示成功，`data` 为空时不输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    fn envelope(code: ErrorCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data,
            timestamp: Utc::now(),
        }
    }

    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::envelope(ErrorCode::Success, message, Some(data))
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self::envelope(ErrorCode::Success, message, None)
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::envelope(code, message, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_omits_data() {
        let value =
            serde_json::to_value(ApiResponse::error_empty(ErrorCode::RatingInvalid, "bad")).unwrap();
        assert_eq!(value["code"], ErrorCode::RatingInvalid as i32);
        assert_eq!(value["message"], "bad");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_success_envelope() {
        let value = serde_json::to_value(ApiResponse::success(vec![1, 2], "ok")).unwrap();
        assert_eq!(value["code"], 0);
        assert_eq!(value["data"], serde_json::json!([1, 2]));
    }
}
