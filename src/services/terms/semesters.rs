use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TermService;
use crate::models::terms::requests::CreateSemesterRequest;
use crate::models::terms::responses::SemesterListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_semester(
    service: &TermService,
    year_id: i64,
    semester_data: CreateSemesterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 一学年只有两个学期
    if !matches!(semester_data.ordinal, 1 | 2) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TermDataInvalid,
            "Semester ordinal must be 1 or 2",
        )));
    }
    if semester_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TermDataInvalid,
            "Semester name cannot be empty",
        )));
    }

    match storage.get_school_year_by_id(year_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SchoolYearNotFound,
                "School year not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get school year: {e}"),
                )),
            );
        }
    }

    match storage.create_semester(year_id, semester_data).await {
        Ok(semester) => Ok(HttpResponse::Created().json(ApiResponse::success(
            semester,
            "Semester created successfully",
        ))),
        Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SemesterAlreadyExists,
                "Semester already exists for this school year",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create semester: {e}"),
            )),
        ),
    }
}

pub async fn list_semesters(
    service: &TermService,
    year_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_school_year_by_id(year_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SchoolYearNotFound,
                "School year not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get school year: {e}"),
                )),
            );
        }
    }

    match storage.list_semesters_by_year(year_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SemesterListResponse { items },
            "Semester list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve semester list: {e}"),
            )),
        ),
    }
}
