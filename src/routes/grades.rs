use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::GradeRequest;
use crate::models::profiles::entities::Permission;
use crate::services::GradeService;
use crate::utils::SafeIDI64;

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn list_grades(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&req).await
}

pub async fn create_grade(
    req: HttpRequest,
    data: web::Json<GradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.create_grade(data.into_inner(), &req).await
}

pub async fn update_grade(
    req: HttpRequest,
    grade_id: SafeIDI64,
    data: web::Json<GradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(grade_id.0, data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .service(
                // 所有登录用户可查看年级，写操作需要年级管理权限
                web::scope("")
                    .wrap(middlewares::RequirePermission::any(&[Permission::CrudGrades]).writes_only())
                    .route("", web::get().to(list_grades))
                    .route("", web::post().to(create_grade))
                    .route("/{id}", web::put().to(update_grade)),
            ),
    );
}
