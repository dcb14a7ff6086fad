use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{GuardianService, ensure_student_exists};
use crate::models::guardians::requests::{CreateGuardianRequest, UpdateGuardianRequest};
use crate::models::guardians::responses::GuardianListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_guardian(
    service: &GuardianService,
    student_id: i64,
    guardian_data: CreateGuardianRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = ensure_student_exists(&storage, student_id).await {
        return Ok(response);
    }

    if guardian_data.full_name.trim().is_empty() || guardian_data.relationship.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Guardian name and relationship cannot be empty",
        )));
    }

    match storage.create_guardian(student_id, guardian_data).await {
        Ok(guardian) => Ok(HttpResponse::Created().json(ApiResponse::success(
            guardian,
            "Guardian created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create guardian: {e}"),
            )),
        ),
    }
}

pub async fn list_guardians(
    service: &GuardianService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = ensure_student_exists(&storage, student_id).await {
        return Ok(response);
    }

    match storage.list_guardians_by_student(student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GuardianListResponse { items },
            "Guardian list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve guardian list: {e}"),
            )),
        ),
    }
}

pub async fn update_guardian(
    service: &GuardianService,
    guardian_id: i64,
    update_data: UpdateGuardianRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_guardian(guardian_id, update_data).await {
        Ok(Some(guardian)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            guardian,
            "Guardian updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GuardianNotFound,
            "Guardian not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update guardian: {e}"),
            )),
        ),
    }
}

pub async fn delete_guardian(
    service: &GuardianService,
    guardian_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_guardian(guardian_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Guardian deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GuardianNotFound,
            "Guardian not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Guardian deletion failed: {e}"),
            )),
        ),
    }
}
