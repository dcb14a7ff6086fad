use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩记录实体：学生 × 科目 × 学期 × 月份
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeEntry {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub semester_id: i64,
    pub month: i32,
    pub score: f64,
    pub recorded_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
