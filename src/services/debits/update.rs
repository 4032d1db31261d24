use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{editable_extra, validate_values};
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::debits::requests::UpdateExtraDebitRequest;
use crate::services::{check, get_storage};

pub async fn update_extra(
    debit_id: i64,
    data: UpdateExtraDebitRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    check(validate_values(&data.description, data.value, data.discount))?;
    let storage = get_storage(request)?;

    editable_extra(storage.as_ref(), debit_id, "alterar").await?;

    let debit = storage
        .update_debit(
            debit_id,
            UpdateExtraDebitRequest {
                description: data.description.trim().to_string(),
                ..data
            },
        )
        .await?
        .ok_or_else(|| SchoolError::not_found("débito não encontrado"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(debit, "débito atualizado")))
}
