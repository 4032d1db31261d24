use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::validate_grade;
use crate::cache::keys;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::grades::requests::GradeRequest;
use crate::services::{get_cache, get_storage};

pub async fn update_grade(
    grade_id: i64,
    data: GradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    validate_grade(&data)?;

    let storage = get_storage(request)?;

    if storage.get_grade_by_id(grade_id).await?.is_none() {
        return Err(SchoolError::validation("esta turma não existe!").into());
    }

    if let Some(existing) = storage
        .get_grade_by_name_and_year(&data.name, &data.year)
        .await?
        && existing.id != grade_id
    {
        return Err(SchoolError::validation("já existe uma turma com este nome neste ano!").into());
    }

    let grade = storage
        .update_grade(grade_id, data)
        .await?
        .ok_or_else(|| SchoolError::not_found("esta turma não existe!"))?;
    get_cache(request)?.invalidate(keys::GRADES).await;

    info!("Grade {} updated", grade.id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "turma atualizada")))
}
