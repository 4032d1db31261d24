pub mod create;
pub mod enrollment;
pub mod provisioning;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Local;
use tracing::error;

use crate::errors::{Result, SchoolError};
use crate::models::contracts::responses::ContractDetail;
use crate::models::debits::entities::{Debit, DebitType};
use crate::models::payments::{
    entities::{Payment, PaymentMethod},
    requests::{CreatePaymentRequest, NewPayment},
};
use crate::models::users::entities::User;
use crate::providers::{Providers, ReceiptClient, ReceiptData, ReceiptItem};
use crate::storage::Storage;

pub struct PaymentService;

impl PaymentService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 支付注册费并激活合同
    pub async fn create_enrollment_payment(
        &self,
        data: CreatePaymentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enrollment::create_enrollment_payment(data, request).await
    }

    // 支付分期或额外账单
    pub async fn create_payment(
        &self,
        data: CreatePaymentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_payment(data, request).await
    }
}

/// 生成收据并交给文件存储，返回收据文件名
pub(crate) async fn issue_receipt(
    providers: &Providers,
    contract: &ContractDetail,
    operative: &str,
    debit: &Debit,
    amount: f64,
    method: PaymentMethod,
) -> Result<String> {
    let client = contract
        .agreements
        .first()
        .map(|agreement| ReceiptClient {
            name: agreement.person.name.clone(),
            cpf: agreement.person.cpf.clone(),
        })
        .ok_or_else(|| {
            SchoolError::validation("não é possível pagar um débito de um contrato sem responsáveis!")
        })?;

    let receipt = providers
        .receipts
        .generate(ReceiptData {
            client,
            operative: operative.to_string(),
            items: vec![ReceiptItem {
                description: debit.description.clone(),
                base_value: debit.value,
                true_value: amount,
                quantity: 1,
                variation: amount - debit.value,
            }],
            method,
        })
        .await?;

    providers.files.save_file(&receipt).await?;
    Ok(receipt)
}

/// 占用账单后生成收据并登记付款
///
/// 支付标记是条件更新，并发请求中只有一个能占用账单；
/// 占用之后的任一步失败都会撤销支付标记并删除已保存的收据。
pub(crate) async fn settle_debit(
    storage: &dyn Storage,
    providers: &Providers,
    contract: &ContractDetail,
    operator: &User,
    debit: &Debit,
    amount: f64,
    method: PaymentMethod,
) -> Result<Payment> {
    if !storage
        .mark_debit_paid(debit.id, Local::now().date_naive())
        .await?
    {
        let message = match debit.debit_type {
            DebitType::Enrollment => "não é possível pagar uma matrícula que já foi paga!",
            _ => "não é possível pagar um débito que já foi pago!",
        };
        return Err(SchoolError::validation(message));
    }

    let receipt =
        match issue_receipt(providers, contract, &operator.username, debit, amount, method).await {
            Ok(receipt) => receipt,
            Err(e) => {
                release_debit(storage, debit.id).await;
                return Err(e);
            }
        };

    let payment = storage
        .create_payment(NewPayment {
            debit_id: debit.id,
            user_id: operator.id,
            method,
            amount,
            receipt: receipt.clone(),
        })
        .await;

    if payment.is_err() {
        discard_receipt(providers, &receipt).await;
        release_debit(storage, debit.id).await;
    }
    payment
}

async fn release_debit(storage: &dyn Storage, debit_id: i64) {
    if let Err(e) = storage.release_debit(debit_id).await {
        error!("Failed to release debit {} after a failed payment: {}", debit_id, e);
    }
}

pub(crate) async fn discard_receipt(providers: &Providers, receipt: &str) {
    if let Err(e) = providers.files.delete_file(receipt).await {
        error!("Failed to delete orphan receipt {}: {}", receipt, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::debits::requests::NewDebit;
    use crate::services::test_support::TestContext;
    use chrono::NaiveDate;

    async fn extra_debit(ctx: &TestContext, contract_id: i64) -> Debit {
        ctx.storage
            .create_debit(NewDebit {
                contract_id,
                description: "Excursão".to_string(),
                value: 75.0,
                discount: 0.0,
                payment_limit_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                debit_type: DebitType::Extra,
            })
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn test_debit_claimed_elsewhere_is_not_paid_twice() {
        let ctx = TestContext::new().await;
        let operator = ctx.operator().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;
        let debit = extra_debit(&ctx, contract.id).await;
        let detail = ctx.storage.get_contract_detail(contract.id).await.unwrap().unwrap();

        // 另一个请求先完成了支付标记
        assert!(ctx.storage.mark_debit_paid(debit.id, Local::now().date_naive()).await.unwrap());

        let err = settle_debit(
            ctx.storage.as_ref(),
            &ctx.fakes.providers(),
            &detail,
            &operator,
            &debit,
            75.0,
            PaymentMethod::Cash,
        )
        .await
        .unwrap_err();
        assert_eq!(err.message(), "não é possível pagar um débito que já foi pago!");
        assert!(ctx.fakes.receipts.generated().is_empty());
        assert!(ctx.fakes.files.saved().is_empty());
        assert!(ctx.storage.list_payments_by_contract(contract.id).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_failed_receipt_releases_the_debit() {
        let ctx = TestContext::new().await;
        let operator = ctx.operator().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let student = ctx.student("Lia Souza").await;
        let contract = ctx.storage.create_contract(student.id, grade.id).await.unwrap();
        let debit = extra_debit(&ctx, contract.id).await;
        let detail = ctx.storage.get_contract_detail(contract.id).await.unwrap().unwrap();

        // 没有责任人的合同无法生成收据
        let result = settle_debit(
            ctx.storage.as_ref(),
            &ctx.fakes.providers(),
            &detail,
            &operator,
            &debit,
            75.0,
            PaymentMethod::Cash,
        )
        .await;
        assert!(result.is_err());

        let debit = ctx.storage.get_debit_by_id(debit.id).await.unwrap().unwrap();
        assert!(!debit.paid);
        assert_eq!(debit.payday, None);
    }

    #[actix_web::test]
    async fn test_failed_payment_insert_discards_receipt() {
        let ctx = TestContext::new().await;
        let operator = ctx.operator().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;
        let debit = extra_debit(&ctx, contract.id).await;
        let detail = ctx.storage.get_contract_detail(contract.id).await.unwrap().unwrap();

        // 已有付款占用了唯一的 debit_id
        ctx.storage
            .create_payment(NewPayment {
                debit_id: debit.id,
                user_id: operator.id,
                method: PaymentMethod::Cash,
                amount: 75.0,
                receipt: "anterior.txt".to_string(),
            })
            .await
            .unwrap();

        let result = settle_debit(
            ctx.storage.as_ref(),
            &ctx.fakes.providers(),
            &detail,
            &operator,
            &debit,
            75.0,
            PaymentMethod::Cash,
        )
        .await;
        assert!(result.is_err());
        assert_eq!(ctx.fakes.files.deleted(), ctx.fakes.files.saved());
        assert!(!ctx.storage.get_debit_by_id(debit.id).await.unwrap().unwrap().paid);
    }
}
