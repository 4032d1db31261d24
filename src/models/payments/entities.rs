use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::define_string_enum;

define_string_enum! {
    // 支付方式
    #[ts(export, export_to = "payment.ts")]
    PaymentMethod {
        CreditCard => "creditCard",
        DebitCard => "debitCard",
        Cash => "cash",
        Check => "check",
        Deposit => "deposit",
        Slip => "slip",
    }
}

impl PaymentMethod {
    /// 收据上显示的名称
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Cartão de Crédito",
            PaymentMethod::DebitCard => "Cartão de Débito",
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Check => "Cheque",
            PaymentMethod::Deposit => "Depósito",
            PaymentMethod::Slip => "Boleto",
        }
    }
}

// 付款实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "payment.ts")]
pub struct Payment {
    pub id: i64,
    pub debit_id: i64,
    pub user_id: i64,
    pub method: PaymentMethod,
    pub amount: f64,
    pub receipt: Option<String>,
    pub receipt_url: Option<String>,
    pub discharged: bool,
    pub discharge_day: Option<chrono::NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
