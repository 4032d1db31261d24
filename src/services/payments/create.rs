use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::settle_debit;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::debits::entities::DebitType;
use crate::models::payments::requests::CreatePaymentRequest;
use crate::services::{current_user, get_providers, get_storage};

pub async fn create_payment(
    data: CreatePaymentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = get_storage(request)?;
    let operator = current_user(request)?.user;

    let debit = storage
        .get_debit_by_id(data.debit_id)
        .await?
        .ok_or_else(|| SchoolError::validation("não é possível pagar um débito que não existe!"))?;

    if debit.paid {
        return Err(
            SchoolError::validation("não é possível pagar um débito que já foi pago!").into(),
        );
    }

    if debit.debit_type == DebitType::Enrollment {
        return Err(SchoolError::validation(
            "não é possível pagar uma matrícula a partir deste serviço!",
        )
        .into());
    }

    let contract = storage
        .get_contract_detail(debit.contract_id)
        .await?
        .ok_or_else(|| {
            SchoolError::validation("não é possível pagar um débito de um contrato inexistente!")
        })?;

    let amount = debit.value - debit.discount;
    let payment = settle_debit(
        storage.as_ref(),
        &get_providers(request)?,
        &contract,
        &operator,
        &debit,
        amount,
        data.method,
    )
    .await?;

    info!("Debit {} paid by user {}, payment {}", debit.id, operator.id, payment.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(payment, "pagamento registrado")))
}
