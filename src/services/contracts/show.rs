use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::services::get_storage;

pub async fn show_contract(contract_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let detail = get_storage(request)?
        .get_contract_detail(contract_id)
        .await?
        .ok_or_else(|| SchoolError::not_found("contrato não encontrado"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "contrato encontrado")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{TestContext, body_json, error_parts};
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_show_contract_with_relations() {
        let ctx = TestContext::new().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, person) = ctx.contract(&grade, "Lia Souza").await;

        let body = body_json(show_contract(contract.id, &ctx.request()).await.unwrap()).await;
        assert_eq!(body["data"]["id"], contract.id);
        assert_eq!(body["data"]["grade"]["name"], "1º ano");
        assert_eq!(body["data"]["agreements"][0]["person"]["cpf"], person.cpf);

        let err = show_contract(contract.id + 100, &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(error_parts(err).0, StatusCode::NOT_FOUND);
    }
}
