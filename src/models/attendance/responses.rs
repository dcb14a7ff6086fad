use serde::Serialize;
use ts_rs::TS;

use super::entities::Attendance;
use crate::models::common::PaginationInfo;

// 考勤列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Attendance>,
}

// 批量考勤单条结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct BulkAttendanceResult {
    pub student_id: i64,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// 批量考勤响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct BulkAttendanceResponse {
    pub date: String,
    pub recorded: usize,
    pub failed: usize,
    pub results: Vec<BulkAttendanceResult>,
}

// 考勤汇总响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSummaryResponse {
    pub student_id: i64,
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub excused: i64,
    /// (present + late + excused) / total，无记录时为 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance_rate: Option<f64>,
}
