use serde::Serialize;

/// 业务错误码，随响应信封中的 `code` 字段返回
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,
    StorageFailure = 1005,

    // 认证与用户
    AuthFailed = 2000,
    UserNotFound = 2001,
    UserNameAlreadyExists = 2002,
    UserEmailAlreadyExists = 2003,
    UserNameInvalid = 2004,
    UserEmailInvalid = 2005,
    UserPasswordInvalid = 2006,
    RegisterFailed = 2007,

    // 考核任务
    AdmissionNotFound = 3000,
    RatingInvalid = 3001,
    TrainerLaunchFailed = 3002,
    TrainerFeedDisabled = 3003,

    // 场景
    ScenarioNotFound = 4000,
    ScenarioAccidentsRequired = 4001,

    // 目录
    LocationNotFound = 5000,
    LocationSensorsRequired = 5001,
    SensorNotFound = 5002,
    ModelNotFound = 5003,
    AccidentNotFound = 5004,
}
