use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    AttendanceQueryParams, AttendanceSummaryParams, BulkAttendanceRequest, RecordAttendanceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn record_attendance(
    req: HttpRequest,
    record_data: web::Json<RecordAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .record_attendance(record_data.into_inner(), &req)
        .await
}

pub async fn record_bulk_attendance(
    req: HttpRequest,
    bulk_data: web::Json<BulkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .record_bulk_attendance(bulk_data.into_inner(), &req)
        .await
}

pub async fn list_attendance(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<AttendanceQueryParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(student_id.0, query.into_inner(), &req)
        .await
}

pub async fn summarize_attendance(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    params: web::Query<AttendanceSummaryParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .summarize_attendance(student_id.0, params.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(record_attendance)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/bulk").route(
                    web::post()
                        .to(record_bulk_attendance)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .route(
                "/students/{student_id}/summary",
                web::get().to(summarize_attendance),
            )
            .route("/students/{student_id}", web::get().to(list_attendance)),
    );
}
