use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Local;
use tracing::{error, info};

use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::discharges::requests::CreateDischargeRequest;
use crate::services::payments::{discard_receipt, issue_receipt};
use crate::services::{current_user, get_providers, get_storage};

pub async fn create_discharge(
    data: CreateDischargeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = get_storage(request)?;
    let operator = current_user(request)?.user;

    let payment = storage
        .get_payment_by_id(data.payment_id)
        .await?
        .ok_or_else(|| {
            SchoolError::validation("não é possível quitar um pagamento que não existe!")
        })?;

    if payment.discharged {
        return Err(SchoolError::validation(
            "não é possível quitar um pagamento que já foi quitado!",
        )
        .into());
    }

    let debit = storage
        .get_debit_by_id(payment.debit_id)
        .await?
        .ok_or_else(|| {
            SchoolError::validation("não é possível quitar um pagamento de um débito inexistente!")
        })?;

    let contract = storage
        .get_contract_detail(debit.contract_id)
        .await?
        .ok_or_else(|| {
            SchoolError::validation("não é possível quitar um pagamento de um contrato inexistente!")
        })?;

    if !storage
        .mark_payment_discharged(payment.id, Local::now().date_naive())
        .await?
    {
        return Err(SchoolError::validation(
            "não é possível quitar um pagamento que já foi quitado!",
        )
        .into());
    }

    let providers = get_providers(request)?;
    let attempt = match issue_receipt(
        &providers,
        &contract,
        &operator.username,
        &debit,
        payment.amount,
        payment.method,
    )
    .await
    {
        Ok(receipt) => {
            let created = storage
                .create_discharge(payment.id, operator.id, &receipt)
                .await;
            if created.is_err() {
                discard_receipt(&providers, &receipt).await;
            }
            created
        }
        Err(e) => Err(e),
    };

    let discharge = match attempt {
        Ok(discharge) => discharge,
        Err(e) => {
            if let Err(release) = storage.release_payment_discharge(payment.id).await {
                error!("Failed to release payment {}: {}", payment.id, release);
            }
            return Err(e.into());
        }
    };

    info!("Payment {} discharged by user {}", payment.id, operator.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(discharge, "pagamento quitado")))
}
