pub mod rate_limit;
pub mod require_jwt;
pub mod require_permission;

pub use rate_limit::RateLimit;
pub use require_jwt::{AuthenticatedUser, RequireJWT};
pub use require_permission::RequirePermission;

use actix_web::{HttpResponse, http::StatusCode, http::header::CONTENT_TYPE};

use crate::models::{ApiResponse, ErrorCode};

// 辅助函数：创建统一格式的错误响应
pub(crate) fn create_error_response(
    status: StatusCode,
    code: ErrorCode,
    message: &str,
) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .json(ApiResponse::<()>::error_empty(code, message))
}
