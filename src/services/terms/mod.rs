pub mod school_years;
pub mod semesters;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::terms::requests::{CreateSchoolYearRequest, CreateSemesterRequest};
use crate::storage::Storage;

pub struct TermService {
    storage: Option<Arc<dyn Storage>>,
}

impl TermService {
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

    pub async fn create_school_year(
        &self,
        year_data: CreateSchoolYearRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        school_years::create_school_year(self, year_data, request).await
    }

    pub async fn list_school_years(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        school_years::list_school_years(self, request).await
    }

    pub async fn activate_school_year(
        &self,
        year_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        school_years::activate_school_year(self, year_id, request).await
    }

    pub async fn create_semester(
        &self,
        year_id: i64,
        semester_data: CreateSemesterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        semesters::create_semester(self, year_id, semester_data, request).await
    }

    pub async fn list_semesters(
        &self,
        year_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        semesters::list_semesters(self, year_id, request).await
    }
}
