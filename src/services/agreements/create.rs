use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::agreements::requests::CreateAgreementRequest;
use crate::services::get_storage;

pub async fn create_agreement(
    data: CreateAgreementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = get_storage(request)?;

    if storage.get_contract_by_id(data.contract_id).await?.is_none() {
        return Err(SchoolError::validation(
            "não é possível criar um acordo com um contrato inexistente!",
        )
        .into());
    }

    if storage.get_person_by_id(data.person_id).await?.is_none() {
        return Err(SchoolError::validation(
            "não é possível criar um acordo com um responsável inexistente!",
        )
        .into());
    }

    let agreement = storage
        .create_agreement(data.contract_id, data.person_id, data.responsible_type)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(agreement, "acordo criado")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::agreements::entities::ResponsibleType;
    use crate::services::test_support::{TestContext, body_json, error_parts, unique_cpf};
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_adds_responsible_to_contract() {
        let ctx = TestContext::new().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;
        let person = ctx.person("Carla Souza", &unique_cpf()).await;

        let response = create_agreement(
            CreateAgreementRequest {
                contract_id: contract.id,
                person_id: person.id,
                responsible_type: ResponsibleType::Educational,
            },
            &ctx.request(),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["data"]["responsible_type"], "educational");

        let detail = ctx
            .storage
            .get_contract_detail(contract.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.agreements.len(), 2);
    }

    #[actix_web::test]
    async fn test_missing_references() {
        let ctx = TestContext::new().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;

        let err = create_agreement(
            CreateAgreementRequest {
                contract_id: contract.id + 10,
                person_id: 1,
                responsible_type: ResponsibleType::Financial,
            },
            &ctx.request(),
        )
        .await
        .unwrap_err();
        assert_eq!(
            error_parts(err),
            (
                StatusCode::BAD_REQUEST,
                "não é possível criar um acordo com um contrato inexistente!".to_string()
            )
        );

        let err = create_agreement(
            CreateAgreementRequest {
                contract_id: contract.id,
                person_id: 999,
                responsible_type: ResponsibleType::Financial,
            },
            &ctx.request(),
        )
        .await
        .unwrap_err();
        assert_eq!(
            error_parts(err).1,
            "não é possível criar um acordo com um responsável inexistente!"
        );
    }
}
