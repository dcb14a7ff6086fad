use serde::Deserialize;
use ts_rs::TS;

// 录入/覆盖一条成绩
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct RecordGradeRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub semester_id: i64,
    pub month: i32,
    pub score: f64,
}

// 成绩列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListQuery {
    pub student_id: i64,
    pub semester_id: i64,
    pub subject_id: Option<i64>,
    pub month: Option<i32>,
}

// 月度报表参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct MonthlyReportParams {
    pub student_id: i64,
    pub semester_id: i64,
    pub month: i32,
}

// 学期报表参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct SemesterReportParams {
    pub student_id: i64,
    pub semester_id: i64,
}

// 学年报表参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct YearlyReportParams {
    pub student_id: i64,
    pub school_year_id: i64,
}

// 学期平均分导出参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct SemesterExportParams {
    pub semester_id: i64,
    pub grade_level: i32,
    #[serde(default = "default_export_format")]
    pub format: String,
}

fn default_export_format() -> String {
    "csv".to_string()
}
