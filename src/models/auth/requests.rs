use serde::Deserialize;
use ts_rs::TS;

// 登录请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct SessionRequest {
    pub username: String,
    pub password: String,
}
