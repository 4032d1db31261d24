use serde::Deserialize;
use ts_rs::TS;

use super::entities::Permissions;

// 创建/更新权限配置请求，未给出的权限默认为 false
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "profile.ts")]
pub struct ProfileRequest {
    pub name: String,
    #[serde(flatten)]
    pub permissions: Permissions,
}
