use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "discharge.ts")]
pub struct CreateDischargeRequest {
    pub payment_id: i64,
}
