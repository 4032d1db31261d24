use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::agreements::requests::CreateAgreementRequest;
use crate::models::profiles::entities::Permission;
use crate::services::AgreementService;

// 懒加载的全局 AgreementService 实例
static AGREEMENT_SERVICE: Lazy<AgreementService> = Lazy::new(AgreementService::new_lazy);

pub async fn create_agreement(
    req: HttpRequest,
    data: web::Json<CreateAgreementRequest>,
) -> ActixResult<HttpResponse> {
    AGREEMENT_SERVICE
        .create_agreement(data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_agreement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/agreements")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequirePermission::any(&[
                        Permission::CreateNewEnrollments,
                        Permission::ValidateEnrollments,
                    ]))
                    .route("", web::post().to(create_agreement)),
            ),
    );
}
