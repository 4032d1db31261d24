use serde::Deserialize;
use ts_rs::TS;

use super::entities::PaymentMethod;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "payment.ts")]
pub struct CreatePaymentRequest {
    pub debit_id: i64,
    pub method: PaymentMethod,
}

/// 写入存储层的新付款
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub debit_id: i64,
    pub user_id: i64,
    pub method: PaymentMethod,
    pub amount: f64,
    pub receipt: String,
}
