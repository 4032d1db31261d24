//! 跨域配置

use actix_cors::Cors;
use actix_web::http::Method;
use tracing::warn;

use crate::config::CorsConfig;

/// 按配置构建 CORS 中间件
///
/// `allowed_origins` 含 `*` 时放行任意来源，其余条目逐一登记。
pub fn build_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default().max_age(config.max_age);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|name| match name.parse::<Method>() {
            Ok(method) => Some(method),
            Err(_) => {
                warn!("Ignoring invalid CORS method: {}", name);
                None
            }
        })
        .collect();

    cors.allowed_methods(methods)
        .allowed_headers(config.allowed_headers.iter().map(String::as_str))
}
