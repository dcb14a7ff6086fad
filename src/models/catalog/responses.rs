use serde::Serialize;
use ts_rs::TS;

use super::entities::{Course, Subject};

// 科目列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct SubjectListResponse {
    pub items: Vec<Subject>,
}

// 课程列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CourseListResponse {
    pub items: Vec<Course>,
}
