use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::guardians::requests::{
    CreateGuardianRequest, UpdateGuardianRequest, UpsertFamilyInfoRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::GuardianService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 GuardianService 实例
static GUARDIAN_SERVICE: Lazy<GuardianService> = Lazy::new(GuardianService::new_lazy);

// HTTP处理程序
pub async fn list_guardians(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE.list_guardians(student_id.0, &req).await
}

pub async fn create_guardian(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    guardian_data: web::Json<CreateGuardianRequest>,
) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE
        .create_guardian(student_id.0, guardian_data.into_inner(), &req)
        .await
}

pub async fn update_guardian(
    req: HttpRequest,
    guardian_id: SafeIDI64,
    update_data: web::Json<UpdateGuardianRequest>,
) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE
        .update_guardian(guardian_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_guardian(
    req: HttpRequest,
    guardian_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE.delete_guardian(guardian_id.0, &req).await
}

pub async fn get_family_info(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE.get_family_info(student_id.0, &req).await
}

pub async fn upsert_family_info(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    family_data: web::Json<UpsertFamilyInfoRequest>,
) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE
        .upsert_family_info(student_id.0, family_data.into_inner(), &req)
        .await
}

// 配置路由
//
// 这些前缀比 /api/v1/students 更具体，必须先于学生路由注册。
pub fn configure_guardian_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students/{student_id}/guardians")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_guardians))
                    .route(
                        web::post()
                            .to(create_guardian)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::put()
                            .to(update_guardian)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_guardian)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
    cfg.service(
        web::scope("/api/v1/students/{student_id}/family")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(get_family_info))
                    .route(
                        web::put()
                            .to(upsert_family_info)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
