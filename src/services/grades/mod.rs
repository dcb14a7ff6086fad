pub mod average;
pub mod export;
pub mod list;
pub mod record;
pub mod reports;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::{
    GradeListQuery, MonthlyReportParams, RecordGradeRequest, SemesterExportParams,
    SemesterReportParams, YearlyReportParams,
};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
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

    pub async fn record_grade(
        &self,
        record_data: RecordGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_grade(self, record_data, request).await
    }

    pub async fn list_grades(
        &self,
        query: GradeListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, query, request).await
    }

    pub async fn monthly_report(
        &self,
        params: MonthlyReportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reports::monthly_report(self, params, request).await
    }

    pub async fn semester_report(
        &self,
        params: SemesterReportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reports::semester_report(self, params, request).await
    }

    pub async fn yearly_report(
        &self,
        params: YearlyReportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reports::yearly_report(self, params, request).await
    }

    pub async fn export_semester_averages(
        &self,
        params: SemesterExportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_semester_averages(self, params, request).await
    }
}
