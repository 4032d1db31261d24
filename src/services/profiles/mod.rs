pub mod create;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::profiles::requests::ProfileRequest;

pub struct ProfileService;

impl ProfileService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 权限配置列表（缓存）
    pub async fn list_profiles(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_profiles(request).await
    }

    pub async fn create_profile(
        &self,
        data: ProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_profile(data, request).await
    }

    pub async fn update_profile(
        &self,
        profile_id: i64,
        data: ProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_profile(profile_id, data, request).await
    }
}
