pub mod create;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};

pub struct UserService;

impl UserService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 获取用户列表（缓存）
    pub async fn list_users(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_users(request).await
    }

    // 创建用户
    pub async fn create_user(
        &self,
        user_data: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_user(user_data, request).await
    }

    // 更新用户信息
    pub async fn update_user(
        &self,
        user_id: i64,
        update_data: UpdateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user(user_id, update_data, request).await
    }
}
