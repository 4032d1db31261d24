use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::notify_contact;
use crate::cache::keys;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::contracts::entities::ContractStatus;
use crate::models::enrollments::requests::ReviewEnrollmentRequest;
use crate::services::{get_cache, get_providers, get_storage};

pub async fn mark_pendent(
    contract_id: i64,
    data: ReviewEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = get_storage(request)?;

    let contract = storage.get_contract_by_id(contract_id).await?.ok_or_else(|| {
        SchoolError::validation("não é possível tornar pendente uma matrícula inexistente!")
    })?;

    if !contract.status.can_be_marked_pendent() {
        return Err(SchoolError::validation(
            "só é possível tornar pendente uma matrícula em análise!",
        )
        .into());
    }

    let contract = storage
        .update_contract_status(contract.id, ContractStatus::Pendent, data.comment.clone())
        .await?
        .ok_or_else(|| SchoolError::not_found("contrato não encontrado"))?;

    get_cache(request)?
        .invalidate(&keys::under_analysis_and_pendent_contracts(contract.grade_id))
        .await;

    if let Some(contact) = &data.responsible_contact {
        notify_contact(
            &get_providers(request)?,
            contact,
            "[Santiago] Matrícula Pendente",
            "A matrícula possui pendências que precisam ser resolvidas junto à secretaria.",
            data.comment.as_deref(),
        )
        .await;
    }

    info!("Contract {} marked as pendent", contract.id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(contract, "matrícula pendente")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enrollments::requests::ResponsibleContact;
    use crate::services::test_support::{TestContext, body_json, error_parts};
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_mark_pendent_with_notification() {
        let ctx = TestContext::new().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;

        let data = ReviewEnrollmentRequest {
            comment: Some("falta comprovante de residência".to_string()),
            responsible_contact: Some(ResponsibleContact {
                name: "Carla".to_string(),
                email: "carla@example.com".to_string(),
            }),
        };
        let body = body_json(mark_pendent(contract.id, data, &ctx.request()).await.unwrap()).await;
        assert_eq!(body["data"]["status"], "pendent");

        let sent = ctx.fakes.mail.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "[Santiago] Matrícula Pendente");
        assert!(sent[0].body.contains("falta comprovante de residência"));
    }

    #[actix_web::test]
    async fn test_only_under_analysis_can_become_pendent() {
        let ctx = TestContext::new().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;

        mark_pendent(contract.id, ReviewEnrollmentRequest::default(), &ctx.request())
            .await
            .unwrap();
        let err = mark_pendent(contract.id, ReviewEnrollmentRequest::default(), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(error_parts(err).0, StatusCode::BAD_REQUEST);
    }
}
