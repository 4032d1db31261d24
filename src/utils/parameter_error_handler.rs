use actix_web::{
    HttpRequest,
    error::{JsonPayloadError, QueryPayloadError},
};

use crate::errors::SchoolError;

/// JSON 请求体解析失败
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("JSON payload error: {}", err);
    SchoolError::validation(format!("corpo da requisição inválido: {err}")).into()
}

/// 查询参数解析失败
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Query payload error: {}", err);
    SchoolError::validation(format!("parâmetros de consulta inválidos: {err}")).into()
}
