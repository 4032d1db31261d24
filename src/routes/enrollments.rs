use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::{CreateEnrollmentRequest, ReviewEnrollmentRequest};
use crate::models::profiles::entities::Permission;
use crate::services::EnrollmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn create_enrollment(
    req: HttpRequest,
    data: web::Json<CreateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .create_enrollment(data.into_inner(), &req)
        .await
}

pub async fn approve_enrollment(
    req: HttpRequest,
    contract_id: SafeIDI64,
    data: web::Json<ReviewEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .approve_enrollment(contract_id.0, data.into_inner(), &req)
        .await
}

pub async fn mark_pendent(
    req: HttpRequest,
    contract_id: SafeIDI64,
    data: web::Json<ReviewEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .mark_pendent(contract_id.0, data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(create_enrollment)
                        .wrap(middlewares::RequirePermission::any(&[
                            Permission::CreateNewEnrollments,
                        ])),
                ),
            )
            .service(
                // 审核操作
                web::scope("/{id}")
                    .wrap(middlewares::RequirePermission::any(&[
                        Permission::ValidateEnrollments,
                    ]))
                    .route("/approve", web::patch().to(approve_enrollment))
                    .route("/pendent", web::patch().to(mark_pendent)),
            ),
    );
}
