use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::discharges::requests::CreateDischargeRequest;
use crate::models::profiles::entities::Permission;
use crate::services::DischargeService;

// 懒加载的全局 DischargeService 实例
static DISCHARGE_SERVICE: Lazy<DischargeService> = Lazy::new(DischargeService::new_lazy);

pub async fn create_discharge(
    req: HttpRequest,
    data: web::Json<CreateDischargeRequest>,
) -> ActixResult<HttpResponse> {
    DISCHARGE_SERVICE
        .create_discharge(data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_discharge_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/discharges")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequirePermission::any(&[Permission::DischargePayments]))
                    .route("", web::post().to(create_discharge)),
            ),
    );
}
