use serde::Deserialize;
use ts_rs::TS;

use super::entities::DebitType;

// 新建额外账单请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "debit.ts")]
pub struct CreateExtraDebitRequest {
    pub contract_id: i64,
    pub description: String,
    pub value: f64,
    #[serde(default)]
    pub discount: f64,
    pub payment_limit_date: chrono::NaiveDate,
}

// 更新额外账单请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "debit.ts")]
pub struct UpdateExtraDebitRequest {
    pub description: String,
    pub value: f64,
    #[serde(default)]
    pub discount: f64,
    pub payment_limit_date: chrono::NaiveDate,
}

/// 写入存储层的新账单
#[derive(Debug, Clone)]
pub struct NewDebit {
    pub contract_id: i64,
    pub description: String,
    pub value: f64,
    pub discount: f64,
    pub payment_limit_date: chrono::NaiveDate,
    pub debit_type: DebitType,
}
