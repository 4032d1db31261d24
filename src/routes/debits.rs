use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::debits::requests::{CreateExtraDebitRequest, UpdateExtraDebitRequest};
use crate::models::profiles::entities::Permission;
use crate::services::DebitService;
use crate::utils::SafeIDI64;

// 懒加载的全局 DebitService 实例
static DEBIT_SERVICE: Lazy<DebitService> = Lazy::new(DebitService::new_lazy);

pub async fn create_extra(
    req: HttpRequest,
    data: web::Json<CreateExtraDebitRequest>,
) -> ActixResult<HttpResponse> {
    DEBIT_SERVICE.create_extra(data.into_inner(), &req).await
}

pub async fn update_extra(
    req: HttpRequest,
    debit_id: SafeIDI64,
    data: web::Json<UpdateExtraDebitRequest>,
) -> ActixResult<HttpResponse> {
    DEBIT_SERVICE
        .update_extra(debit_id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_extra(req: HttpRequest, debit_id: SafeIDI64) -> ActixResult<HttpResponse> {
    DEBIT_SERVICE.delete_extra(debit_id.0, &req).await
}

// 配置路由
pub fn configure_debit_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/debits")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(create_extra)
                        .wrap(middlewares::RequirePermission::any(&[
                            Permission::CreateExtraDebits,
                        ])),
                ),
            )
            .service(
                web::resource("/{id}")
                    .wrap(middlewares::RequirePermission::any(&[Permission::CrudExtraDebits]))
                    .route(web::put().to(update_extra))
                    .route(web::delete().to(delete_extra)),
            ),
    );
}
