use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::contracts::requests::ContractSearchQuery;
use crate::services::get_storage;

pub async fn search_by_student_name(
    grade_id: i64,
    query: ContractSearchQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let statuses = query.statuses().map_err(SchoolError::validation)?;

    let contracts = get_storage(request)?
        .search_contracts_by_student_name(grade_id, query.student_name.trim(), &statuses)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(contracts, "contratos encontrados")))
}
