use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::define_string_enum;

define_string_enum! {
    // 责任类型
    #[ts(export, export_to = "agreement.ts")]
    ResponsibleType {
        Financial => "financial",
        Supportive => "supportive",
        Educational => "educational",
    }
}

// 协议：责任人在合同中的角色
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "agreement.ts")]
pub struct Agreement {
    pub id: i64,
    pub contract_id: i64,
    pub person_id: i64,
    pub responsible_type: ResponsibleType,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
