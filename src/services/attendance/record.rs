use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::{BulkAttendanceRequest, RecordAttendanceRequest};
use crate::models::attendance::responses::{BulkAttendanceResponse, BulkAttendanceResult};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_date;

pub async fn record_attendance(
    service: &AttendanceService,
    record_data: RecordAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_date(&record_data.date) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttendanceDataInvalid,
            msg,
        )));
    }

    match storage.get_student_by_id(record_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student: {e}"),
                )),
            );
        }
    }

    let recorded_by = RequireJWT::extract_user_id(request);

    match storage.upsert_attendance(recorded_by, record_data).await {
        Ok(attendance) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            attendance,
            "Attendance recorded successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to record attendance: {e}"),
            )),
        ),
    }
}

/// 整班点名：每条独立落库，单条失败不影响其余
pub async fn record_bulk_attendance(
    service: &AttendanceService,
    bulk_data: BulkAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_date(&bulk_data.date) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttendanceDataInvalid,
            msg,
        )));
    }
    if bulk_data.entries.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttendanceDataInvalid,
            "Attendance entries cannot be empty",
        )));
    }

    let recorded_by = RequireJWT::extract_user_id(request);

    let mut results = Vec::with_capacity(bulk_data.entries.len());
    let mut recorded = 0usize;

    for entry in bulk_data.entries {
        let record = RecordAttendanceRequest {
            student_id: entry.student_id,
            date: bulk_data.date.clone(),
            status: entry.status,
            note: entry.note,
        };
        match storage.upsert_attendance(recorded_by, record).await {
            Ok(_) => {
                recorded += 1;
                results.push(BulkAttendanceResult {
                    student_id: entry.student_id,
                    ok: true,
                    error: None,
                });
            }
            Err(e) => {
                results.push(BulkAttendanceResult {
                    student_id: entry.student_id,
                    ok: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    let failed = results.len() - recorded;
    let response = BulkAttendanceResponse {
        date: bulk_data.date,
        recorded,
        failed,
        results,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Bulk attendance processed",
    )))
}
