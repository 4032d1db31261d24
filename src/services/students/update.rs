use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::students::requests::StudentRequest;
use crate::services::{check, get_storage};
use crate::utils::validate::validate_not_blank;

pub(crate) fn validate_student(data: &StudentRequest) -> Result<(), SchoolError> {
    check(validate_not_blank(&data.name, "o nome do aluno é obrigatório!"))
}

pub async fn update_student(
    student_id: i64,
    data: StudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    validate_student(&data)?;

    let student = get_storage(request)?
        .update_student(student_id, data)
        .await?
        .ok_or_else(|| SchoolError::validation("não é possível atualizar um aluno inexistente!"))?;

    info!("Student {} updated", student.id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(student, "aluno atualizado")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{TestContext, body_json, error_parts, student_request};
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_update_student() {
        let ctx = TestContext::new().await;
        let student = ctx.student("Lia Souza").await;

        let mut data = student_request("Lia Souza");
        data.food_alergy = Some("amendoim".to_string());
        let body = body_json(update_student(student.id, data, &ctx.request()).await.unwrap()).await;
        assert_eq!(body["data"]["food_alergy"], "amendoim");
    }

    #[actix_web::test]
    async fn test_missing_student() {
        let ctx = TestContext::new().await;
        let err = update_student(5, student_request("Lia"), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(error_parts(err).0, StatusCode::BAD_REQUEST);
    }
}
