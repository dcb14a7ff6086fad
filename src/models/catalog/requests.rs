use serde::Deserialize;
use ts_rs::TS;

// 创建科目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    pub code: String,
}

// 更新科目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub code: Option<String>,
}

// 创建课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CreateCourseRequest {
    pub subject_id: i64,
    pub school_year_id: i64,
    pub teacher_id: i64,
    pub grade_level: i32,
}

// 更新课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct UpdateCourseRequest {
    pub teacher_id: Option<i64>,
    pub grade_level: Option<i32>,
}

// 课程列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CourseListQuery {
    pub school_year_id: Option<i64>,
    pub grade_level: Option<i32>,
    pub teacher_id: Option<i64>,
}
