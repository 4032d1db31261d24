use serde::Deserialize;
use ts_rs::TS;

// 用户创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub profile_id: i64,
}

// 用户更新请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct UpdateUserRequest {
    pub username: String,
    pub password: String,
    pub profile_id: i64,
}
