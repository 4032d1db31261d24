/*!
 * 基于权限标记的访问控制中间件
 *
 * 必须在 RequireJWT 之后使用。列出的权限中任意一个为真即放行。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/api/v1/profiles")
 *     .wrap(RequirePermission::any(&[Permission::CrudProfiles]))
 *     .wrap(RequireJWT)
 * ```
 *
 * 只约束写操作（GET/HEAD 对所有已登录用户开放）：
 *
 * ```rust,ignore
 * .wrap(RequirePermission::any(&[Permission::CrudGrades]).writes_only())
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, StatusCode},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::middlewares::AuthenticatedUser;
use crate::models::ErrorCode;
use crate::models::profiles::entities::Permission;

use super::create_error_response;

#[derive(Clone)]
pub struct RequirePermission {
    required: Vec<Permission>,
    writes_only: bool,
}

impl RequirePermission {
    /// 需要任一权限
    pub fn any(permissions: &[Permission]) -> Self {
        Self {
            required: permissions.to_vec(),
            writes_only: false,
        }
    }

    /// 只对非只读方法做校验
    pub fn writes_only(mut self) -> Self {
        self.writes_only = true;
        self
    }

    fn applies_to(&self, method: &Method) -> bool {
        !(self.writes_only && (method == Method::GET || method == Method::HEAD))
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequirePermissionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePermissionMiddleware {
            service: Rc::new(service),
            guard: self.clone(),
        }))
    }
}

pub struct RequirePermissionMiddleware<S> {
    service: Rc<S>,
    guard: RequirePermission,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionMiddleware<S>
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
        let guard = self.guard.clone();

        Box::pin(async move {
            if !guard.applies_to(req.method()) {
                return Ok(srv.call(req).await?.map_into_left_body());
            }

            let authenticated = req.extensions().get::<AuthenticatedUser>().cloned();

            match authenticated {
                Some(auth) if auth.permissions.has_any(&guard.required) => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Some(auth) => {
                    info!(
                        "Access denied for user {}. Required any of: {:?}",
                        auth.user.id, guard.required
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::FORBIDDEN,
                            ErrorCode::Forbidden,
                            "usuário sem permissão!",
                        )
                        .map_into_right_body(),
                    ))
                }
                None => {
                    info!(
                        "Permission check failed: no authenticated user. Make sure RequireJWT middleware is applied first."
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "token não informado",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profiles::entities::Permissions;
    use crate::models::users::entities::User;
    use actix_web::{App, HttpResponse, test, web};

    fn authenticated(permissions: Permissions) -> AuthenticatedUser {
        AuthenticatedUser {
            user: User {
                id: 1,
                username: "secretaria".to_string(),
                password_hash: String::new(),
                profile_id: 1,
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            },
            permissions,
        }
    }

    async fn call_with(
        guard: RequirePermission,
        method: Method,
        permissions: Option<Permissions>,
    ) -> StatusCode {
        let app = test::init_service(
            App::new().service(
                web::resource("/grades")
                    .wrap(guard)
                    .wrap_fn(move |req, srv| {
                        if let Some(permissions) = permissions {
                            req.extensions_mut().insert(authenticated(permissions));
                        }
                        srv.call(req)
                    })
                    .route(web::get().to(HttpResponse::Ok))
                    .route(web::post().to(HttpResponse::Created)),
            ),
        )
        .await;
        let req = test::TestRequest::default()
            .method(method)
            .uri("/grades")
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_any_permission_admits() {
        let permissions = Permissions {
            validate_enrollments_permiss: true,
            ..Default::default()
        };
        let guard = RequirePermission::any(&[
            Permission::CreateNewEnrollments,
            Permission::ValidateEnrollments,
        ]);
        assert_eq!(
            call_with(guard, Method::POST, Some(permissions)).await,
            StatusCode::CREATED
        );
    }

    #[actix_web::test]
    async fn test_missing_permission_is_forbidden() {
        let guard = RequirePermission::any(&[Permission::CrudGrades]);
        assert_eq!(
            call_with(guard, Method::POST, Some(Permissions::default())).await,
            StatusCode::FORBIDDEN
        );
    }

    #[actix_web::test]
    async fn test_writes_only_lets_reads_through() {
        let guard = RequirePermission::any(&[Permission::CrudGrades]).writes_only();
        assert_eq!(
            call_with(guard.clone(), Method::GET, Some(Permissions::default())).await,
            StatusCode::OK
        );
        assert_eq!(
            call_with(guard, Method::POST, Some(Permissions::default())).await,
            StatusCode::FORBIDDEN
        );
    }

    #[actix_web::test]
    async fn test_without_authentication_is_unauthorized() {
        let guard = RequirePermission::any(&[Permission::CrudUsers]);
        assert_eq!(
            call_with(guard, Method::POST, None).await,
            StatusCode::UNAUTHORIZED
        );
    }
}
