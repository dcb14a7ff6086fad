use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{GuardianService, ensure_student_exists};
use crate::models::guardians::requests::UpsertFamilyInfoRequest;
use crate::models::guardians::responses::FamilyInfoResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn upsert_family_info(
    service: &GuardianService,
    student_id: i64,
    family_data: UpsertFamilyInfoRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = ensure_student_exists(&storage, student_id).await {
        return Ok(response);
    }

    match storage.upsert_family_info(student_id, family_data).await {
        Ok(family) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FamilyInfoResponse { family },
            "Family information saved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to save family information: {e}"),
            )),
        ),
    }
}

pub async fn get_family_info(
    service: &GuardianService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = ensure_student_exists(&storage, student_id).await {
        return Ok(response);
    }

    match storage.get_family_info_by_student(student_id).await {
        Ok(Some(family)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FamilyInfoResponse { family },
            "Family information retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FamilyInfoNotFound,
            "Family information not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve family information: {e}"),
            )),
        ),
    }
}
