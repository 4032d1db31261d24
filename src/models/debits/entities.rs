use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::define_string_enum;

define_string_enum! {
    // 账单类型
    #[ts(export, export_to = "debit.ts")]
    DebitType {
        Enrollment => "enrollment",
        Installment => "installment",
        Extra => "extra",
    }
}

// 账单实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "debit.ts")]
pub struct Debit {
    pub id: i64,
    pub contract_id: i64,
    pub description: String,
    pub value: f64,
    pub discount: f64,
    pub paid: bool,
    pub payday: Option<chrono::NaiveDate>,
    pub payment_limit_date: chrono::NaiveDate,
    #[serde(rename = "type")]
    pub debit_type: DebitType,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
