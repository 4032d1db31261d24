/*!
 * JWT 认证中间件
 *
 * 验证 `Authorization: Bearer <token>`，并把当前用户与其权限写入请求扩展。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/api/v1/contracts")
 *     .wrap(RequireJWT)
 *     .route("/{id}", web::get().to(show_contract))
 * ```
 *
 * 处理程序中通过 `RequireJWT::extract_user(&req)` 取得 [`AuthenticatedUser`]。
 *
 * ## 认证流程
 *
 * 1. 提取并校验令牌签名与有效期
 * 2. 按 `user:{token}` 查询缓存，未命中时回源数据库并写回缓存
 * 3. 令牌中的权限标记随用户一起放入请求扩展
 * 4. 任一步骤失败返回 401
 */

use crate::cache::{ObjectCache, keys};
use crate::models::ErrorCode;
use crate::models::profiles::entities::Permissions;
use crate::models::users::entities::User;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

/// 已认证的用户
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub permissions: Permissions,
}

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：提取并验证 JWT，返回当前用户
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<AuthenticatedUser, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "token não informado".to_string())?;

    let claims = JwtUtils::verify_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "token inválido".to_string()
    })?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| "token inválido".to_string())?;

    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .ok_or_else(|| "Cache not found in app data".to_string())?
        .get_ref()
        .clone();

    let cache_key = keys::authenticated_user(token);
    if let Some(user) = cache.recover::<User>(&cache_key).await
        && user.id == user_id
    {
        return Ok(AuthenticatedUser {
            user,
            permissions: claims.permissions,
        });
    }
    debug!("User {} not found in cache, loading from storage", user_id);

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .ok_or_else(|| "Storage not found in app data".to_string())?
        .get_ref()
        .clone();

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|_| "Failed to retrieve user from storage".to_string())?
        .ok_or_else(|| "usuário não encontrado".to_string())?;

    cache
        .register_with_ttl(&cache_key, &user, JwtUtils::expires_in().max(0) as u64)
        .await;

    Ok(AuthenticatedUser {
        user,
        permissions: claims.permissions,
    })
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(HttpResponse::NoContent().finish().map_into_right_body()));
            }

            match extract_and_validate_jwt(&req).await {
                Ok(authenticated) => {
                    debug!(
                        "JWT authentication successful for ID: {}",
                        authenticated.user.id
                    );
                    req.extensions_mut().insert(authenticated);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, &err)
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 从请求扩展中提取当前用户，仅在 RequireJWT 保护的路由中有值
    pub fn extract_user(req: &actix_web::HttpRequest) -> Option<AuthenticatedUser> {
        req.extensions().get::<AuthenticatedUser>().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profiles::entities::Permissions;
    use crate::services::test_support::TestContext;
    use actix_web::{App, HttpRequest, test};

    async fn whoami(req: HttpRequest) -> HttpResponse {
        match RequireJWT::extract_user(&req) {
            Some(auth) => HttpResponse::Ok().body(format!(
                "{}:{}",
                auth.user.id, auth.permissions.crud_grades_permiss
            )),
            None => HttpResponse::InternalServerError().finish(),
        }
    }

    async fn call(ctx: &TestContext, token: Option<&str>) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.storage.clone()))
                .app_data(web::Data::new(ctx.cache.clone()))
                .service(
                    web::resource("/me")
                        .wrap(RequireJWT)
                        .route(web::get().to(whoami)),
                ),
        )
        .await;
        let mut req = test::TestRequest::get().uri("/me");
        if let Some(token) = token {
            req = req.insert_header(("Authorization", format!("Bearer {token}")));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let ctx = TestContext::new().await;
        let (status, _) = call(&ctx, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_token_exposes_user_and_claims() {
        let ctx = TestContext::new().await;
        let user = ctx.operator().await;
        let permissions = Permissions {
            crud_grades_permiss: true,
            ..Default::default()
        };
        let token = JwtUtils::generate_token(user.id, user.profile_id, permissions).unwrap();

        let (status, body) = call(&ctx, Some(&token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, format!("{}:true", user.id));

        let cached = ctx.cache.recover::<User>(&keys::authenticated_user(&token)).await;
        assert_eq!(cached.map(|u| u.id), Some(user.id));
    }

    #[actix_web::test]
    async fn test_token_for_unknown_user_is_rejected() {
        let ctx = TestContext::new().await;
        let token = JwtUtils::generate_token(9_999, 1, Permissions::default()).unwrap();
        let (status, _) = call(&ctx, Some(&token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
