use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::services::get_storage;

pub async fn find_by_cpf(cpf: String, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let person = get_storage(request)?
        .get_person_by_cpf(cpf.trim())
        .await?
        .ok_or_else(|| SchoolError::not_found("nenhum responsável encontrado com este CPF!"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(person, "responsável encontrado")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{TestContext, body_json, error_parts};
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_find_by_cpf() {
        let ctx = TestContext::new().await;
        let person = ctx.person("Carla Dias", "11122233344").await;

        let body = body_json(find_by_cpf("11122233344".to_string(), &ctx.request()).await.unwrap()).await;
        assert_eq!(body["data"]["id"], person.id);

        let err = find_by_cpf("00000000000".to_string(), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(error_parts(err).0, StatusCode::NOT_FOUND);
    }
}
