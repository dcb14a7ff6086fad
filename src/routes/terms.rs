use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::terms::requests::{CreateSchoolYearRequest, CreateSemesterRequest};
use crate::models::users::entities::UserRole;
use crate::services::TermService;
use crate::utils::SafeIDI64;

// 懒加载的全局 TermService 实例
static TERM_SERVICE: Lazy<TermService> = Lazy::new(TermService::new_lazy);

// HTTP处理程序
pub async fn list_school_years(req: HttpRequest) -> ActixResult<HttpResponse> {
    TERM_SERVICE.list_school_years(&req).await
}

pub async fn create_school_year(
    req: HttpRequest,
    year_data: web::Json<CreateSchoolYearRequest>,
) -> ActixResult<HttpResponse> {
    TERM_SERVICE
        .create_school_year(year_data.into_inner(), &req)
        .await
}

pub async fn activate_school_year(
    req: HttpRequest,
    year_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    TERM_SERVICE.activate_school_year(year_id.0, &req).await
}

pub async fn list_semesters(req: HttpRequest, year_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TERM_SERVICE.list_semesters(year_id.0, &req).await
}

pub async fn create_semester(
    req: HttpRequest,
    year_id: SafeIDI64,
    semester_data: web::Json<CreateSemesterRequest>,
) -> ActixResult<HttpResponse> {
    TERM_SERVICE
        .create_semester(year_id.0, semester_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_term_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/terms")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/school-years")
                    .route(web::get().to(list_school_years))
                    .route(
                        web::post()
                            .to(create_school_year)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/school-years/{id}/activate").route(
                    web::post()
                        .to(activate_school_year)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/school-years/{id}/semesters")
                    .route(web::get().to(list_semesters))
                    .route(
                        web::post()
                            .to(create_semester)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
