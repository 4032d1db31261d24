use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::cache::keys;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::contracts::requests::UpdateContractGradeRequest;
use crate::services::{get_cache, get_storage};

pub async fn update_grade(
    contract_id: i64,
    data: UpdateContractGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = get_storage(request)?;

    let contract = storage.get_contract_by_id(contract_id).await?.ok_or_else(|| {
        SchoolError::validation("não é possível alterar a turma de um contrato inexistente!")
    })?;

    if storage.get_grade_by_id(data.grade_id).await?.is_none() {
        return Err(SchoolError::validation(
            "não é possível alterar a turma de um contrato para uma turma inexistente!",
        )
        .into());
    }

    let updated = storage
        .update_contract_grade(contract.id, data.grade_id)
        .await?
        .ok_or_else(|| SchoolError::not_found("contrato não encontrado"))?;

    let cache = get_cache(request)?;
    for grade_id in [contract.grade_id, data.grade_id] {
        cache
            .invalidate(&keys::under_analysis_and_pendent_contracts(grade_id))
            .await;
        cache.invalidate(&keys::active_contracts(grade_id)).await;
    }

    info!(
        "Contract {} moved from grade {} to {}",
        updated.id, contract.grade_id, updated.grade_id
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "turma do contrato atualizada")))
}
