use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::editable_extra;
use crate::models::ApiResponse;
use crate::services::get_storage;

pub async fn delete_extra(debit_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = get_storage(request)?;

    let debit = editable_extra(storage.as_ref(), debit_id, "excluir").await?;
    storage.delete_debit(debit.id).await?;

    info!("Extra debit {} of contract {} deleted", debit.id, debit.contract_id);
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("débito excluído")))
}
