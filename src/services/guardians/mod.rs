pub mod family;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::guardians::requests::{
    CreateGuardianRequest, UpdateGuardianRequest, UpsertFamilyInfoRequest,
};
use crate::storage::Storage;

pub struct GuardianService {
    storage: Option<Arc<dyn Storage>>,
}

impl GuardianService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_guardian(
        &self,
        student_id: i64,
        guardian_data: CreateGuardianRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_guardian(self, student_id, guardian_data, request).await
    }

    pub async fn list_guardians(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::list_guardians(self, student_id, request).await
    }

    pub async fn update_guardian(
        &self,
        guardian_id: i64,
        update_data: UpdateGuardianRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_guardian(self, guardian_id, update_data, request).await
    }

    pub async fn delete_guardian(
        &self,
        guardian_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_guardian(self, guardian_id, request).await
    }

    pub async fn upsert_family_info(
        &self,
        student_id: i64,
        family_data: UpsertFamilyInfoRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        family::upsert_family_info(self, student_id, family_data, request).await
    }

    pub async fn get_family_info(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        family::get_family_info(self, student_id, request).await
    }
}

/// 校验学生存在，Err 携带应直接返回的错误响应
pub(crate) async fn ensure_student_exists(
    storage: &Arc<dyn Storage>,
    student_id: i64,
) -> Result<(), HttpResponse> {
    use crate::models::{ApiResponse, ErrorCode};

    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get student: {e}"),
            )),
        ),
    }
}
