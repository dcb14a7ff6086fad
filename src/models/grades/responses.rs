use serde::Serialize;
use ts_rs::TS;

use super::entities::GradeEntry;

// 成绩列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListResponse {
    pub items: Vec<GradeEntry>,
}

// 单科分数（报表用）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct SubjectScore {
    pub subject_id: i64,
    pub subject_name: String,
    pub score: f64,
}

// 月度报表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct MonthlyReportResponse {
    pub student_id: i64,
    pub semester_id: i64,
    pub month: i32,
    pub grade_level: i32,
    pub scores: Vec<SubjectScore>,
    /// 本月平均分，无成绩时为 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

// 学期内单月平均
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct MonthAverage {
    pub month: i32,
    pub average: f64,
}

// 学期报表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct SemesterReportResponse {
    pub student_id: i64,
    pub semester_id: i64,
    pub grade_level: i32,
    pub months: Vec<MonthAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester_average: Option<f64>,
}

// 学年内单学期平均
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct SemesterAverage {
    pub semester_id: i64,
    pub ordinal: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

// 学年报表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct YearlyReportResponse {
    pub student_id: i64,
    pub school_year_id: i64,
    pub semesters: Vec<SemesterAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_average: Option<f64>,
}
