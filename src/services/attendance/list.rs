use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::attendance::requests::{AttendanceListQuery, AttendanceQueryParams};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_date;

pub async fn list_attendance(
    service: &AttendanceService,
    student_id: i64,
    query: AttendanceQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    for date in [&query.from, &query.to].into_iter().flatten() {
        if let Err(msg) = validate_date(date) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AttendanceDataInvalid,
                msg,
            )));
        }
    }

    let list_query = AttendanceListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        from: query.from,
        to: query.to,
    };

    match storage
        .list_attendance_with_pagination(student_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Attendance list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve attendance list: {e}"),
            )),
        ),
    }
}
