use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::validate_values;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::debits::{
    entities::DebitType,
    requests::{CreateExtraDebitRequest, NewDebit},
};
use crate::services::{check, get_storage};

pub async fn create_extra(
    data: CreateExtraDebitRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    check(validate_values(&data.description, data.value, data.discount))?;
    let storage = get_storage(request)?;

    if storage.get_contract_by_id(data.contract_id).await?.is_none() {
        return Err(SchoolError::validation(
            "não é possível criar um débito para um contrato inexistente!",
        )
        .into());
    }

    let debit = storage
        .create_debit(NewDebit {
            contract_id: data.contract_id,
            description: data.description.trim().to_string(),
            value: data.value,
            discount: data.discount,
            payment_limit_date: data.payment_limit_date,
            debit_type: DebitType::Extra,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(debit, "débito criado")))
}
