//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_trainer_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TrainerError {
            $($variant(String),)*
        }

        impl TrainerError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TrainerError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TrainerError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TrainerError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TrainerError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TrainerError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_trainer_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    DatabaseConfig("E002", "Database Configuration Error"),
    DatabaseConnection("E003", "Database Connection Error"),
    DatabaseOperation("E004", "Database Operation Error"),
    FileOperation("E005", "File Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    TrainerLaunch("E012", "Trainer Launch Error"),
}

/// 错误分类，服务层据此决定 HTTP 状态码和对外消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    Validation,
    Storage,
    Io,
    Unexpected,
}

impl TrainerError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            TrainerError::NotFound(_) => ErrorClass::NotFound,
            TrainerError::Validation(_) => ErrorClass::Validation,
            TrainerError::DatabaseConfig(_)
            | TrainerError::DatabaseConnection(_)
            | TrainerError::DatabaseOperation(_) => ErrorClass::Storage,
            TrainerError::FileOperation(_) | TrainerError::TrainerLaunch(_) => ErrorClass::Io,
            _ => ErrorClass::Unexpected,
        }
    }
}

impl fmt::Display for TrainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TrainerError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for TrainerError {
    fn from(err: sea_orm::DbErr) -> Self {
        TrainerError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for TrainerError {
    fn from(err: std::io::Error) -> Self {
        TrainerError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TrainerError {
    fn from(err: serde_json::Error) -> Self {
        TrainerError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TrainerError {
    fn from(err: chrono::ParseError) -> Self {
        TrainerError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrainerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TrainerError::cache_connection("test").code(), "E001");
        assert_eq!(TrainerError::database_config("test").code(), "E002");
        assert_eq!(TrainerError::validation("test").code(), "E006");
        assert_eq!(TrainerError::trainer_launch("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TrainerError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            TrainerError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TrainerError::validation("Invalid rating");
        assert_eq!(err.message(), "Invalid rating");
    }

    #[test]
    fn test_format_simple() {
        let err = TrainerError::not_found("Admission 7");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Admission 7"));
    }

    #[test]
    fn test_error_class() {
        assert_eq!(TrainerError::not_found("x").class(), ErrorClass::NotFound);
        assert_eq!(
            TrainerError::validation("x").class(),
            ErrorClass::Validation
        );
        assert_eq!(
            TrainerError::database_operation("x").class(),
            ErrorClass::Storage
        );
        assert_eq!(
            TrainerError::database_connection("x").class(),
            ErrorClass::Storage
        );
        assert_eq!(TrainerError::trainer_launch("x").class(), ErrorClass::Io);
        assert_eq!(TrainerError::file_operation("x").class(), ErrorClass::Io);
        assert_eq!(
            TrainerError::serialization("x").class(),
            ErrorClass::Unexpected
        );
    }

    #[test]
    fn test_db_err_is_storage_class() {
        let err: TrainerError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.class(), ErrorClass::Storage);
    }
}
