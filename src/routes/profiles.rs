use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::profiles::{entities::Permission, requests::ProfileRequest};
use crate::services::ProfileService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ProfileService 实例
static PROFILE_SERVICE: Lazy<ProfileService> = Lazy::new(ProfileService::new_lazy);

pub async fn list_profiles(req: HttpRequest) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.list_profiles(&req).await
}

pub async fn create_profile(
    req: HttpRequest,
    data: web::Json<ProfileRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.create_profile(data.into_inner(), &req).await
}

pub async fn update_profile(
    req: HttpRequest,
    profile_id: SafeIDI64,
    data: web::Json<ProfileRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE
        .update_profile(profile_id.0, data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/profiles")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequirePermission::any(&[Permission::CrudProfiles]))
                    .route("", web::get().to(list_profiles))
                    .route("", web::post().to(create_profile))
                    .route("/{id}", web::put().to(update_profile)),
            ),
    );
}
