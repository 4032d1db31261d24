use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::cache::keys;
use crate::models::ApiResponse;
use crate::models::contracts::{entities::ContractStatus, responses::ContractListItem};
use crate::services::{get_cache, get_storage};

/// 读缓存，未命中时按状态查询并写回
async fn cached_contracts(
    request: &HttpRequest,
    key: &str,
    grade_id: i64,
    statuses: &[ContractStatus],
) -> crate::errors::Result<Vec<ContractListItem>> {
    let cache = get_cache(request)?;

    if let Some(contracts) = cache.recover::<Vec<ContractListItem>>(key).await {
        return Ok(contracts);
    }

    let contracts = get_storage(request)?
        .list_contracts_by_grade(grade_id, statuses)
        .await?;
    cache.register(key, &contracts).await;
    Ok(contracts)
}

pub async fn list_under_analysis_and_pendent(
    grade_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let contracts = cached_contracts(
        request,
        &keys::under_analysis_and_pendent_contracts(grade_id),
        grade_id,
        &[ContractStatus::UnderAnalysis, ContractStatus::Pendent],
    )
    .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(contracts, "contratos listados")))
}

pub async fn list_accepted_and_active(
    grade_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let contracts = get_storage(request)?
        .list_contracts_by_grade(grade_id, &[ContractStatus::Accepted, ContractStatus::Active])
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(contracts, "contratos listados")))
}

pub async fn list_active(grade_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let contracts = cached_contracts(
        request,
        &keys::active_contracts(grade_id),
        grade_id,
        &[ContractStatus::Active],
    )
    .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(contracts, "contratos listados")))
}
