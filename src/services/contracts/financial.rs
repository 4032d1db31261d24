use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::services::get_storage;

/// 合同必须存在，否则返回 404
async fn ensure_contract(request: &HttpRequest, contract_id: i64) -> crate::errors::Result<()> {
    get_storage(request)?
        .get_contract_by_id(contract_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| SchoolError::not_found("contrato não encontrado"))
}

pub async fn list_debits(contract_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
    ensure_contract(request, contract_id).await?;
    let debits = get_storage(request)?
        .list_debits_by_contract(contract_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(debits, "débitos listados")))
}

pub async fn list_payments(contract_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
    ensure_contract(request, contract_id).await?;
    let payments = get_storage(request)?
        .list_payments_by_contract(contract_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(payments, "pagamentos listados")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::debits::{entities::DebitType, requests::NewDebit};
    use crate::models::payments::{entities::PaymentMethod, requests::NewPayment};
    use crate::services::test_support::{TestContext, body_json, error_parts};
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_lists_debits_and_payments_of_contract() {
        let ctx = TestContext::new().await;
        let operator = ctx.operator().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;
        let (other, _) = ctx.contract(&grade, "Caio Reis").await;

        let debit = ctx
            .storage
            .create_debit(NewDebit {
                contract_id: contract.id,
                description: "Uniforme".to_string(),
                value: 120.0,
                discount: 0.0,
                payment_limit_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                debit_type: DebitType::Extra,
            })
            .await
            .unwrap();
        ctx.storage
            .create_payment(NewPayment {
                debit_id: debit.id,
                user_id: operator.id,
                method: PaymentMethod::Cash,
                amount: 120.0,
                receipt: "recibo.txt".to_string(),
            })
            .await
            .unwrap();

        let body = body_json(list_debits(contract.id, &ctx.request()).await.unwrap()).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["type"], "extra");

        let body = body_json(list_payments(contract.id, &ctx.request()).await.unwrap()).await;
        assert_eq!(body["data"][0]["amount"], 120.0);

        let body = body_json(list_payments(other.id, &ctx.request()).await.unwrap()).await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_missing_contract_is_not_found() {
        let ctx = TestContext::new().await;
        let err = list_debits(404, &ctx.request()).await.unwrap_err();
        assert_eq!(error_parts(err).0, StatusCode::NOT_FOUND);
    }
}
