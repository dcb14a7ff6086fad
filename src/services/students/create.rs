use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::CreateStudentRequest, responses::StudentResponse},
};
use crate::utils::random_code::generate_numeric_code;
use crate::utils::validate::{validate_date, validate_grade_level, validate_student_number};

pub async fn create_student(
    service: &StudentService,
    mut student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 入参校验
    if let Err(msg) = validate_grade_level(student_data.grade_level) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentDataInvalid, msg)));
    }
    if let Some(birth_date) = &student_data.birth_date
        && let Err(msg) = validate_date(birth_date)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentDataInvalid, msg)));
    }
    if student_data.first_name.trim().is_empty() || student_data.last_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::StudentDataInvalid,
            "First name and last name cannot be empty",
        )));
    }

    // 2. 学号：缺省时自动生成，否则校验格式与唯一性
    let student_number = match student_data.student_number.take() {
        Some(number) => {
            if let Err(msg) = validate_student_number(&number) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::StudentDataInvalid, msg)));
            }
            match storage.get_student_by_number(&number).await {
                Ok(Some(_)) => {
                    return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                        ErrorCode::StudentAlreadyExists,
                        "Student number already exists",
                    )));
                }
                Ok(None) => number,
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Failed to check student number: {e}"),
                        ),
                    ));
                }
            }
        }
        // 形如 S2025 + 随机数字
        None => format!(
            "S{}{}",
            chrono::Utc::now().format("%Y"),
            generate_numeric_code(5)
        ),
    };

    match storage.create_student(student_number, student_data).await {
        Ok(student) => {
            tracing::info!("Student {} created", student.student_number);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StudentResponse { student },
                "学生档案创建成功",
            )))
        }
        Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::StudentAlreadyExists,
                "Student number already exists",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentCreationFailed,
                format!("Failed to create student: {e}"),
            )),
        ),
    }
}
