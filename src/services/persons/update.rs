use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::persons::requests::PersonRequest;
use crate::services::{check, get_storage};
use crate::utils::validate::{validate_cpf, validate_email, validate_not_blank};

/// 责任人资料校验，入学申请中创建责任人时同样使用
pub(crate) fn validate_person(data: &PersonRequest) -> Result<(), SchoolError> {
    check(validate_not_blank(&data.name, "o nome do responsável é obrigatório!"))?;
    check(validate_cpf(&data.cpf))?;
    check(validate_email(&data.email))
}

pub async fn update_person(
    person_id: i64,
    data: PersonRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    validate_person(&data)?;

    let storage = get_storage(request)?;

    if storage.get_person_by_id(person_id).await?.is_none() {
        return Err(
            SchoolError::validation("não é possível atualizar um responsável inexistente!").into(),
        );
    }

    if let Some(existing) = storage.get_person_by_cpf(&data.cpf).await?
        && existing.id != person_id
    {
        return Err(SchoolError::validation("este CPF já está cadastrado!").into());
    }

    let person = storage
        .update_person(person_id, data)
        .await?
        .ok_or_else(|| SchoolError::not_found("responsável não encontrado"))?;

    info!("Person {} updated", person.id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(person, "responsável atualizado")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{TestContext, error_parts, person_request};
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_update_person() {
        let ctx = TestContext::new().await;
        let person = ctx.person("Carla Dias", "11122233344").await;

        let mut data = person_request("Carla Dias Souza", "11122233344");
        data.address_complement = Some("apto 201".to_string());
        update_person(person.id, data, &ctx.request()).await.unwrap();

        let stored = ctx.storage.get_person_by_id(person.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Carla Dias Souza");
        assert_eq!(stored.address_complement.as_deref(), Some("apto 201"));
    }

    #[actix_web::test]
    async fn test_cpf_of_other_person_is_rejected() {
        let ctx = TestContext::new().await;
        ctx.person("Pedro Alves", "99988877766").await;
        let person = ctx.person("Carla Dias", "11122233344").await;

        let err = update_person(person.id, person_request("Carla Dias", "99988877766"), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(
            error_parts(err),
            (StatusCode::BAD_REQUEST, "este CPF já está cadastrado!".to_string())
        );
    }

    #[actix_web::test]
    async fn test_invalid_email_is_rejected() {
        let ctx = TestContext::new().await;
        let person = ctx.person("Carla Dias", "11122233344").await;
        let mut data = person_request("Carla Dias", "11122233344");
        data.email = "sem-arroba".to_string();

        assert!(update_person(person.id, data, &ctx.request()).await.is_err());
    }
}
