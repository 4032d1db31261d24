use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 结清记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "discharge.ts")]
pub struct Discharge {
    pub id: i64,
    pub payment_id: i64,
    pub user_id: i64,
    pub receipt: String,
    pub receipt_url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
