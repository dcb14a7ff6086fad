//! 数据模型定义
//!
//! 按业务域划分：requests 为入参、responses 为出参、entities 为业务实体。
//! 数据库实体见 `crate::entity`，两者通过 `into_*` 转换函数衔接。

pub mod common;

pub mod attendance;
pub mod auth;
pub mod catalog;
pub mod enrollments;
pub mod grades;
pub mod guardians;
pub mod students;
pub mod terms;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间，用于运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// API 业务错误码
///
/// HTTP 状态码表达传输层语义，这里的错误码表达业务语义，
/// 前端据此做细粒度的提示与跳转。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 认证授权
    Unauthorized = 1001,
    AuthFailed = 1002,
    TokenExpired = 1003,
    PermissionDenied = 1004,

    // 用户
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserCreationFailed = 2003,
    UserNameInvalid = 2004,
    UserEmailInvalid = 2005,
    PasswordInvalid = 2006,

    // 学生档案
    StudentNotFound = 3001,
    StudentAlreadyExists = 3002,
    StudentCreationFailed = 3003,
    StudentDataInvalid = 3004,
    GuardianNotFound = 3101,
    FamilyInfoNotFound = 3102,

    // 学年 / 学期
    SchoolYearNotFound = 4001,
    SchoolYearAlreadyExists = 4002,
    SemesterNotFound = 4003,
    SemesterAlreadyExists = 4004,
    TermDataInvalid = 4005,

    // 科目 / 课程
    SubjectNotFound = 4101,
    SubjectAlreadyExists = 4102,
    CourseNotFound = 4103,
    CourseAlreadyExists = 4104,

    // 注册
    EnrollmentNotFound = 5001,
    EnrollmentAlreadyExists = 5002,
    EnrollmentDataInvalid = 5003,

    // 考勤
    AttendanceDataInvalid = 5101,
    AttendanceNotFound = 5102,

    // 成绩
    GradeDataInvalid = 5201,
    GradeNotFound = 5202,

    // 通用
    InvalidParameter = 9001,
    NotFound = 9004,
    InternalServerError = 9000,
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 1001);
        assert_eq!(ErrorCode::StudentNotFound as i32, 3001);
        assert_eq!(ErrorCode::GradeDataInvalid as i32, 5201);
        assert_eq!(ErrorCode::InternalServerError as i32, 9000);
    }
}
