use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::SessionRequest;
use crate::services::SessionService;

// 懒加载的全局 SessionService 实例
static SESSION_SERVICE: Lazy<SessionService> = Lazy::new(SessionService::new_lazy);

pub async fn create_session(
    req: HttpRequest,
    data: web::Json<SessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.create_session(data.into_inner(), &req).await
}

// 配置路由
pub fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sessions")
            .wrap(middlewares::RateLimit::sessions())
            .route("", web::post().to(create_session)),
    );
}
