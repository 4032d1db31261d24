use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Datelike, Days, Local};
use tracing::info;

use super::notify_contact;
use crate::cache::keys;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::contracts::entities::ContractStatus;
use crate::models::debits::{entities::DebitType, requests::NewDebit};
use crate::models::enrollments::requests::ReviewEnrollmentRequest;
use crate::services::{get_cache, get_providers, get_storage};
use crate::utils::business_day::next_business_day;

pub const ENROLLMENT_DEBIT_DESCRIPTION: &str = "Matrícula";

pub async fn approve_enrollment(
    contract_id: i64,
    data: ReviewEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = get_storage(request)?;

    let contract = storage.get_contract_by_id(contract_id).await?.ok_or_else(|| {
        SchoolError::validation("não é possível aprovar uma matrícula inexistente!")
    })?;

    if !contract.status.can_be_approved() {
        return Err(SchoolError::validation(
            "não é possível aprovar uma matrícula que não está em análise ou pendente!",
        )
        .into());
    }

    let grade = storage
        .get_grade_by_id(contract.grade_id)
        .await?
        .ok_or_else(|| SchoolError::validation("não é possível aprovar uma matrícula de uma turma inexistente!"))?;

    let contract = storage
        .update_contract_status(contract.id, ContractStatus::Accepted, data.comment.clone())
        .await?
        .ok_or_else(|| SchoolError::not_found("contrato não encontrado"))?;

    let tomorrow = Local::now()
        .date_naive()
        .checked_add_days(Days::new(1))
        .ok_or_else(|| SchoolError::internal("date overflow"))?;

    let providers = get_providers(request)?;
    let mut holidays = providers.holidays_or_empty(tomorrow.year()).await;
    // 年末顺延可能跨入下一年
    if tomorrow.month() == 12 {
        holidays.extend(providers.holidays_or_empty(tomorrow.year() + 1).await);
    }

    let debit = storage
        .create_debit(NewDebit {
            contract_id: contract.id,
            description: ENROLLMENT_DEBIT_DESCRIPTION.to_string(),
            value: grade.value,
            discount: contract.discount,
            payment_limit_date: next_business_day(tomorrow, &holidays),
            debit_type: DebitType::Enrollment,
        })
        .await?;

    let cache = get_cache(request)?;
    cache
        .invalidate(&keys::under_analysis_and_pendent_contracts(grade.id))
        .await;
    cache.invalidate(&keys::active_contracts(grade.id)).await;

    if let Some(contact) = &data.responsible_contact {
        notify_contact(
            &providers,
            contact,
            "[Santiago] Matrícula Aprovada",
            &format!(
                "A matrícula foi aprovada. O pagamento da taxa de matrícula pode ser feito até {}.",
                debit.payment_limit_date.format("%d/%m/%Y")
            ),
            data.comment.as_deref(),
        )
        .await;
    }

    info!("Contract {} accepted, enrollment debit {}", contract.id, debit.id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(contract, "matrícula aprovada")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enrollments::requests::ResponsibleContact;
    use crate::providers::fakes::{FakeHolidayCalendar, FakeProviders};
    use crate::services::test_support::{TestContext, body_json, error_parts};
    use actix_web::http::StatusCode;
    use chrono::{NaiveDate, Weekday};

    fn first_business_day_after_today() -> NaiveDate {
        let tomorrow = Local::now().date_naive() + Days::new(1);
        next_business_day(tomorrow, &[])
    }

    fn review(with_contact: bool) -> ReviewEnrollmentRequest {
        ReviewEnrollmentRequest {
            comment: Some("documentação completa".to_string()),
            responsible_contact: with_contact.then(|| ResponsibleContact {
                name: "john doe".to_string(),
                email: "johndoe@example.com".to_string(),
            }),
        }
    }

    #[actix_web::test]
    async fn test_approve_generates_enrollment_debit_and_mail() {
        let ctx = TestContext::new().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;

        let response = approve_enrollment(contract.id, review(true), &ctx.request())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"]["status"], "accepted");
        assert_eq!(body["data"]["comment"], "documentação completa");

        let debits = ctx.storage.list_debits_by_contract(contract.id).await.unwrap();
        assert_eq!(debits.len(), 1);
        assert_eq!(debits[0].debit_type, DebitType::Enrollment);
        assert_eq!(debits[0].description, "Matrícula");
        assert_eq!(debits[0].value, 800.0);
        assert!(!debits[0].paid);
        assert!(debits[0].payment_limit_date > Local::now().date_naive());
        assert!(!matches!(
            debits[0].payment_limit_date.weekday(),
            Weekday::Sat | Weekday::Sun
        ));

        let sent = ctx.fakes.mail.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "johndoe@example.com");
        assert!(sent[0].body.starts_with("Olá John Doe"));
    }

    #[actix_web::test]
    async fn test_approve_skips_holidays() {
        let holiday = first_business_day_after_today();
        let ctx = TestContext::with_fakes(FakeProviders::with_holidays(FakeHolidayCalendar {
            days: vec![holiday],
            failing: false,
        }))
        .await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;

        approve_enrollment(contract.id, review(false), &ctx.request())
            .await
            .unwrap();

        let debits = ctx.storage.list_debits_by_contract(contract.id).await.unwrap();
        let limit = debits[0].payment_limit_date;
        assert!(limit > holiday);
        assert_eq!(limit, next_business_day(holiday + Days::new(1), &[]));
    }

    #[actix_web::test]
    async fn test_approve_with_calendar_offline() {
        let ctx = TestContext::with_fakes(FakeProviders::with_holidays(FakeHolidayCalendar {
            days: Vec::new(),
            failing: true,
        }))
        .await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;

        approve_enrollment(contract.id, review(false), &ctx.request())
            .await
            .unwrap();

        let debits = ctx.storage.list_debits_by_contract(contract.id).await.unwrap();
        assert_eq!(debits[0].payment_limit_date, first_business_day_after_today());
    }

    #[actix_web::test]
    async fn test_approve_without_contact_sends_no_mail() {
        let ctx = TestContext::new().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;

        approve_enrollment(contract.id, review(false), &ctx.request())
            .await
            .unwrap();
        assert!(ctx.fakes.mail.sent().is_empty());
    }

    #[actix_web::test]
    async fn test_cannot_approve_twice() {
        let ctx = TestContext::new().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;

        approve_enrollment(contract.id, review(false), &ctx.request())
            .await
            .unwrap();
        let err = approve_enrollment(contract.id, review(false), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(error_parts(err).0, StatusCode::BAD_REQUEST);
        assert_eq!(
            ctx.storage.list_debits_by_contract(contract.id).await.unwrap().len(),
            1
        );
    }

    #[actix_web::test]
    async fn test_missing_contract() {
        let ctx = TestContext::new().await;
        let err = approve_enrollment(31, review(true), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(
            error_parts(err),
            (
                StatusCode::BAD_REQUEST,
                "não é possível aprovar uma matrícula inexistente!".to_string()
            )
        );
    }
}
