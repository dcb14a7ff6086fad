pub mod list;
pub mod record;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceQueryParams, AttendanceSummaryParams, BulkAttendanceRequest, RecordAttendanceRequest,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    pub async fn record_attendance(
        &self,
        record_data: RecordAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_attendance(self, record_data, request).await
    }

    pub async fn record_bulk_attendance(
        &self,
        bulk_data: BulkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_bulk_attendance(self, bulk_data, request).await
    }

    pub async fn list_attendance(
        &self,
        student_id: i64,
        query: AttendanceQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, student_id, query, request).await
    }

    pub async fn summarize_attendance(
        &self,
        student_id: i64,
        params: AttendanceSummaryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::summarize_attendance(self, student_id, params, request).await
    }
}
