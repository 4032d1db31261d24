use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::profiles::entities::Permission;
use crate::models::students::requests::StudentRequest;
use crate::services::StudentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeIDI64,
    data: web::Json<StudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(student_id.0, data.into_inner(), &req)
        .await
}

pub async fn update_photos(
    req: HttpRequest,
    student_id: SafeIDI64,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_photos(student_id.0, payload, &req)
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/photos/{id}").route(
                    web::patch()
                        .to(update_photos)
                        .wrap(middlewares::RateLimit::file_upload())
                        .wrap(middlewares::RequirePermission::any(&[
                            Permission::CreateNewEnrollments,
                            Permission::ValidateEnrollments,
                        ])),
                ),
            )
            .service(
                web::resource("/{id}").route(
                    web::put()
                        .to(update_student)
                        .wrap(middlewares::RequirePermission::any(&[
                            Permission::ValidateEnrollments,
                        ])),
                ),
            ),
    );
}
