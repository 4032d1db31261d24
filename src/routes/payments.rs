use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::payments::requests::CreatePaymentRequest;
use crate::models::profiles::entities::Permission;
use crate::services::PaymentService;

// 懒加载的全局 PaymentService 实例
static PAYMENT_SERVICE: Lazy<PaymentService> = Lazy::new(PaymentService::new_lazy);

pub async fn create_enrollment_payment(
    req: HttpRequest,
    data: web::Json<CreatePaymentRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .create_enrollment_payment(data.into_inner(), &req)
        .await
}

pub async fn create_payment(
    req: HttpRequest,
    data: web::Json<CreatePaymentRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.create_payment(data.into_inner(), &req).await
}

// 配置路由
pub fn configure_payment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/payments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequirePermission::any(&[Permission::PayDebits]))
                    .route("/enrollment", web::post().to(create_enrollment_payment))
                    .route("", web::post().to(create_payment)),
            ),
    );
}
