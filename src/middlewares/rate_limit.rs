//! 速率限制中间件
//!
//! 固定窗口计数：同一限制键在 `window_secs` 内最多放行 `max_requests` 次，
//! 超出后返回 429 并在 `Retry-After` 中给出窗口剩余秒数。
//! 已认证请求按用户计数，匿名请求按客户端 IP 计数。

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::net::IpAddr;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::config::AppConfig;
use crate::middlewares::AuthenticatedUser;
use crate::models::{ApiResponse, ErrorCode};

/// 限制键 -> (窗口起点, 已放行次数)
static WINDOWS: Lazy<Cache<String, (Instant, u32)>> = Lazy::new(|| {
    Cache::builder()
        .time_to_idle(Duration::from_secs(3600))
        .max_capacity(100_000)
        .build()
});

#[derive(Clone)]
pub struct RateLimit {
    enabled: bool,
    max_requests: u32,
    window_secs: u64,
    key_prefix: &'static str,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64, key_prefix: &'static str) -> Self {
        Self {
            enabled: true,
            max_requests,
            window_secs,
            key_prefix,
        }
    }

    fn from_config(max_requests: u32, key_prefix: &'static str) -> Self {
        let config = &AppConfig::get().rate_limit;
        Self {
            enabled: config.enabled,
            max_requests,
            window_secs: config.window_secs,
            key_prefix,
        }
    }

    /// 登录尝试
    pub fn sessions() -> Self {
        Self::from_config(AppConfig::get().rate_limit.sessions, "sessions")
    }

    /// 证件照片上传
    pub fn file_upload() -> Self {
        Self::from_config(AppConfig::get().rate_limit.uploads, "upload")
    }
}

enum Decision {
    Allowed { remaining: u32 },
    Limited { retry_after: u64 },
}

async fn register_hit(key: String, max_requests: u32, window: Duration) -> Decision {
    let now = Instant::now();
    let (started, count) = match WINDOWS.get(&key).await {
        Some((started, count)) if now.duration_since(started) < window => (started, count),
        _ => (now, 0),
    };

    if count >= max_requests {
        let left = window.saturating_sub(now.duration_since(started));
        return Decision::Limited {
            retry_after: left.as_secs().max(1),
        };
    }

    WINDOWS.insert(key, (started, count + 1)).await;
    Decision::Allowed {
        remaining: max_requests - count - 1,
    }
}

/// 客户端 IP，优先使用连接信息，其次是反向代理头
fn client_ip(req: &ServiceRequest) -> String {
    let from_connection = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());
    if let Some(ip) = from_connection.as_deref().filter(|ip| ip.parse::<IpAddr>().is_ok()) {
        return ip.to_string();
    }

    ["X-Forwarded-For", "X-Real-IP"]
        .iter()
        .filter_map(|name| req.headers().get(*name))
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(',').next())
        .map(str::trim)
        .find(|ip| ip.parse::<IpAddr>().is_ok())
        .map(str::to_string)
        .or(from_connection)
        .unwrap_or_else(|| "unknown".to_string())
}

fn extract_user_id(req: &ServiceRequest) -> Option<i64> {
    req.extensions()
        .get::<AuthenticatedUser>()
        .map(|auth| auth.user.id)
}

fn limited_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "muitas requisições, tente novamente mais tarde",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
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
        let limit = self.limit.clone();

        Box::pin(async move {
            if !limit.enabled {
                return Ok(srv.call(req).await?.map_into_left_body());
            }

            let identifier = extract_user_id(&req)
                .map(|id| format!("user:{id}"))
                .unwrap_or_else(|| format!("ip:{}", client_ip(&req)));
            let key = format!("{}:{}", limit.key_prefix, identifier);
            let window = Duration::from_secs(limit.window_secs);

            match register_hit(key.clone(), limit.max_requests, window).await {
                Decision::Limited { retry_after } => {
                    warn!(
                        "Rate limit exceeded for {} ({} per {}s)",
                        key, limit.max_requests, limit.window_secs
                    );
                    Ok(req.into_response(limited_response(retry_after).map_into_right_body()))
                }
                Decision::Allowed { remaining } => {
                    let mut res = srv.call(req).await?;
                    let headers = res.headers_mut();
                    headers.insert(
                        HeaderName::from_static("x-ratelimit-limit"),
                        HeaderValue::from(limit.max_requests),
                    );
                    headers.insert(
                        HeaderName::from_static("x-ratelimit-remaining"),
                        HeaderValue::from(remaining),
                    );
                    Ok(res.map_into_left_body())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as atest, web};

    fn header<'a>(res: &'a ServiceResponse<impl actix_web::body::MessageBody>, name: &str) -> Option<&'a str> {
        res.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[actix_web::test]
    async fn test_blocks_after_limit() {
        let app = atest::init_service(
            App::new().service(
                web::resource("/")
                    .wrap(RateLimit::new(2, 60, "test-block"))
                    .route(web::post().to(HttpResponse::Ok)),
            ),
        )
        .await;
        let request = || {
            atest::TestRequest::post()
                .uri("/")
                .peer_addr("10.1.2.3:5000".parse().unwrap())
                .to_request()
        };

        let first = atest::call_service(&app, request()).await;
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(header(&first, "x-ratelimit-limit"), Some("2"));
        assert_eq!(header(&first, "x-ratelimit-remaining"), Some("1"));

        let second = atest::call_service(&app, request()).await;
        assert_eq!(header(&second, "x-ratelimit-remaining"), Some("0"));

        let third = atest::call_service(&app, request()).await;
        assert_eq!(third.status(), StatusCode::TOO_MANY_REQUESTS);
        let retry_after: u64 = header(&third, "retry-after").unwrap().parse().unwrap();
        assert!((1..=60).contains(&retry_after));
    }

    #[actix_web::test]
    async fn test_disabled_limit_never_blocks() {
        let limit = RateLimit {
            enabled: false,
            ..RateLimit::new(1, 60, "test-disabled")
        };
        let app = atest::init_service(
            App::new().service(
                web::resource("/")
                    .wrap(limit)
                    .route(web::post().to(HttpResponse::Ok)),
            ),
        )
        .await;

        for _ in 0..3 {
            let req = atest::TestRequest::post().uri("/").to_request();
            assert_eq!(atest::call_service(&app, req).await.status(), StatusCode::OK);
        }
    }

    #[actix_web::test]
    async fn test_window_resets_after_expiry() {
        let window = Duration::from_millis(50);
        let key = "test-reset:ip:10.9.9.9".to_string();

        assert!(matches!(
            register_hit(key.clone(), 1, window).await,
            Decision::Allowed { remaining: 0 }
        ));
        assert!(matches!(
            register_hit(key.clone(), 1, window).await,
            Decision::Limited { retry_after: 1 }
        ));

        actix_web::rt::time::sleep(Duration::from_millis(80)).await;
        assert!(matches!(
            register_hit(key, 1, window).await,
            Decision::Allowed { .. }
        ));
    }

    #[test]
    fn test_presets_follow_configuration() {
        let config = &AppConfig::get().rate_limit;
        let sessions = RateLimit::sessions();
        assert_eq!(sessions.max_requests, config.sessions);
        assert_eq!(sessions.window_secs, config.window_secs);
        assert_eq!(sessions.key_prefix, "sessions");
        assert_eq!(RateLimit::file_upload().max_requests, config.uploads);
    }
}
