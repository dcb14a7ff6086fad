use serde::Deserialize;
use ts_rs::TS;

// 创建学年请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/term.ts")]
pub struct CreateSchoolYearRequest {
    pub name: String,
    pub starts_on: String,
    pub ends_on: String,
}

// 创建学期请求，ordinal 只允许 1 或 2
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/term.ts")]
pub struct CreateSemesterRequest {
    pub name: String,
    pub ordinal: i32,
}
