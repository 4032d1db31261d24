pub mod create;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::SessionRequest;

pub struct SessionService;

impl SessionService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 登录，签发令牌
    pub async fn create_session(
        &self,
        data: SessionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_session(data, request).await
    }
}
