use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TermService;
use crate::models::terms::requests::CreateSchoolYearRequest;
use crate::models::terms::responses::SchoolYearListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_date;

pub async fn create_school_year(
    service: &TermService,
    year_data: CreateSchoolYearRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if year_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TermDataInvalid,
            "School year name cannot be empty",
        )));
    }
    let starts_on = match validate_date(&year_data.starts_on) {
        Ok(date) => date,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::TermDataInvalid, msg)));
        }
    };
    let ends_on = match validate_date(&year_data.ends_on) {
        Ok(date) => date,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::TermDataInvalid, msg)));
        }
    };
    if ends_on <= starts_on {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TermDataInvalid,
            "School year end date must be after start date",
        )));
    }

    match storage.create_school_year(year_data).await {
        Ok(year) => Ok(HttpResponse::Created().json(ApiResponse::success(
            year,
            "School year created successfully",
        ))),
        Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SchoolYearAlreadyExists,
                "School year name already exists",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create school year: {e}"),
            )),
        ),
    }
}

pub async fn list_school_years(
    service: &TermService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_school_years().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SchoolYearListResponse { items },
            "School year list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve school year list: {e}"),
            )),
        ),
    }
}

pub async fn activate_school_year(
    service: &TermService,
    year_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.activate_school_year(year_id).await {
        Ok(Some(year)) => {
            tracing::info!("School year {} activated", year.name);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                year,
                "School year activated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SchoolYearNotFound,
            "School year not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to activate school year: {e}"),
            )),
        ),
    }
}
