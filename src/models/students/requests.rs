use serde::Deserialize;
use ts_rs::TS;

use super::entities::{Gender, StudentStatus};
use crate::models::common::PaginationQuery;

// 创建学生请求
//
// student_number 缺省时由服务层自动生成。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub student_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birth_date: Option<String>,
    pub grade_level: i32,
    pub address: Option<String>,
    pub phone: Option<String>,
}

// 更新学生请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<String>,
    pub grade_level: Option<i32>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub status: Option<StudentStatus>,
}

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub grade_level: Option<i32>,
    pub status: Option<StudentStatus>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub grade_level: Option<i32>,
    pub status: Option<StudentStatus>,
}

// 学生导出参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentExportParams {
    #[serde(default = "default_export_format")]
    pub format: String,
    pub search: Option<String>,
    pub grade_level: Option<i32>,
    pub status: Option<StudentStatus>,
}

fn default_export_format() -> String {
    "csv".to_string()
}
