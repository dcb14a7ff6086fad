use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::{
    GradeListQuery, MonthlyReportParams, RecordGradeRequest, SemesterExportParams,
    SemesterReportParams, YearlyReportParams,
};
use crate::models::users::entities::UserRole;
use crate::services::GradeService;

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// HTTP处理程序
pub async fn record_grade(
    req: HttpRequest,
    record_data: web::Json<RecordGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .record_grade(record_data.into_inner(), &req)
        .await
}

pub async fn list_grades(
    req: HttpRequest,
    query: web::Query<GradeListQuery>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(query.into_inner(), &req).await
}

pub async fn monthly_report(
    req: HttpRequest,
    params: web::Query<MonthlyReportParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.monthly_report(params.into_inner(), &req).await
}

pub async fn semester_report(
    req: HttpRequest,
    params: web::Query<SemesterReportParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .semester_report(params.into_inner(), &req)
        .await
}

pub async fn yearly_report(
    req: HttpRequest,
    params: web::Query<YearlyReportParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.yearly_report(params.into_inner(), &req).await
}

pub async fn export_semester_averages(
    req: HttpRequest,
    params: web::Query<SemesterExportParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .export_semester_averages(params.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_grades)).route(
                    web::post()
                        .to(record_grade)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .route("/reports/monthly", web::get().to(monthly_report))
            .route(
                "/reports/semester/export",
                web::get().to(export_semester_averages),
            )
            .route("/reports/semester", web::get().to(semester_report))
            .route("/reports/yearly", web::get().to(yearly_report)),
    );
}
