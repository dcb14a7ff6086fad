use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::grades::requests::RecordGradeRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_month_ordinal, validate_score};

pub async fn record_grade(
    service: &GradeService,
    record_data: RecordGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_score(record_data.score) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeDataInvalid, msg)));
    }
    if let Err(msg) = validate_month_ordinal(record_data.month) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeDataInvalid, msg)));
    }

    let recorded_by = RequireJWT::extract_user_id(request);

    // 同一学生同科目同学期同月份的重复录入视为覆盖
    match storage.upsert_grade(recorded_by, record_data).await {
        Ok(grade) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            grade,
            "Grade recorded successfully",
        ))),
        Err(e) if e.to_string().contains("FOREIGN KEY constraint failed") => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::GradeDataInvalid,
                "Referenced student, subject or semester does not exist",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to record grade: {e}"),
            )),
        ),
    }
}
