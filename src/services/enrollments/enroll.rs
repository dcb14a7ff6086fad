use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::enrollments::requests::CreateEnrollmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_grade_level;

pub async fn create_enrollment(
    service: &EnrollmentService,
    enrollment_data: CreateEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_grade_level(enrollment_data.grade_level) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::EnrollmentDataInvalid, msg)));
    }

    match storage.create_enrollment(enrollment_data).await {
        Ok(enrollment) => {
            tracing::info!(
                "Student {} enrolled into school year {}",
                enrollment.student_id,
                enrollment.school_year_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                enrollment,
                "Enrollment created successfully",
            )))
        }
        Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentAlreadyExists,
                "Student is already enrolled in this school year",
            )))
        }
        Err(e) if e.to_string().contains("FOREIGN KEY constraint failed") => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentDataInvalid,
                "Referenced student or school year does not exist",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create enrollment: {e}"),
            )),
        ),
    }
}
