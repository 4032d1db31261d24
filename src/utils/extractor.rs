//! 路径参数提取器
//!
//! 解析失败时直接返回统一的 JSON 错误，而不是 actix 默认的纯文本 404。

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

use crate::errors::SchoolError;

/// 定义解析正整数路径参数的提取器
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal, $message:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(SchoolError::validation($message).into()),
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id", "identificador inválido!");
define_safe_i64_extractor!(SafeGradeIdI64, "grade_id", "identificador de turma inválido!");

/// 上传文件名，拒绝路径穿越
#[derive(Debug, Clone)]
pub struct SafeFileName(pub String);

impl FromRequest for SafeFileName {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let name = req.match_info().get("filename").unwrap_or_default();
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

        ready(if valid {
            Ok(SafeFileName(name.to_string()))
        } else {
            Err(SchoolError::validation("nome de arquivo inválido!").into())
        })
    }
}
