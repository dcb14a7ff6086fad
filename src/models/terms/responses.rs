use serde::Serialize;
use ts_rs::TS;

use super::entities::{SchoolYear, Semester};

// 学年列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/term.ts")]
pub struct SchoolYearListResponse {
    pub items: Vec<SchoolYear>,
}

// 学期列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/term.ts")]
pub struct SemesterListResponse {
    pub items: Vec<Semester>,
}
