use serde::Serialize;
use ts_rs::TS;

use crate::models::profiles::entities::Profile;
use crate::models::users::entities::User;

// 登录响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct SessionResponse {
    pub user: User,
    pub profile: Profile,
    pub token: String,
    pub expires_in: i64,
}
