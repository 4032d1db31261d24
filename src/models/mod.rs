//! 业务数据模型
//!
//! 与 `entity` 中的数据库实体分离：这里定义对外的请求、响应与业务实体。

pub mod agreements;
pub mod auth;
pub mod common;
pub mod contracts;
pub mod debits;
pub mod discharges;
pub mod enrollments;
pub mod grades;
pub mod payments;
pub mod persons;
pub mod profiles;
pub mod students;
pub mod users;

pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 响应体中的业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证
    AuthFailed = 2000,

    // 文件
    FileUploadFailed = 3000,
    FileTypeNotAllowed = 3001,
    FileSizeExceeded = 3002,
    FileNotFound = 3003,
}
