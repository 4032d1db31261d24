use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Datelike, Local, NaiveDate};
use tracing::info;

use super::settle_debit;
use super::provisioning::{
    RESPONSIBLE_PROFILE, STUDENT_PROFILE, active_enrollment_mail, find_or_create_profile,
    provision_responsible, provision_user, send_best_effort,
};
use crate::cache::keys;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::contracts::entities::ContractStatus;
use crate::models::debits::{entities::DebitType, requests::NewDebit};
use crate::models::payments::requests::CreatePaymentRequest;
use crate::services::{current_user, get_cache, get_providers, get_storage};
use crate::utils::business_day::next_business_day;

/// 每月分期的默认到期日
pub const INSTALLMENT_DAY: u32 = 10;

pub async fn create_enrollment_payment(
    data: CreatePaymentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = get_storage(request)?;
    let cache = get_cache(request)?;
    let providers = get_providers(request)?;

    let not_logged = || {
        SchoolError::validation("não é possível pagar uma matrícula sem estar logado no sistema!")
    };
    let operator_id = current_user(request).map_err(|_| not_logged())?.user.id;
    let operator = storage
        .get_user_by_id(operator_id)
        .await?
        .ok_or_else(not_logged)?;

    let debit = storage
        .get_debit_by_id(data.debit_id)
        .await?
        .ok_or_else(|| SchoolError::validation("não é possível pagar uma matrícula que não existe!"))?;

    if debit.paid {
        return Err(
            SchoolError::validation("não é possível pagar uma matrícula que já foi paga!").into(),
        );
    }

    if debit.debit_type != DebitType::Enrollment {
        return Err(SchoolError::validation(
            "não é possível pagar um débito que não é do tipo matrícula a partir deste serviço!",
        )
        .into());
    }

    let contract = storage
        .get_contract_detail(debit.contract_id)
        .await?
        .ok_or_else(|| {
            SchoolError::validation("não é possível pagar um débito de um contrato inexistente!")
        })?;

    let grade = storage
        .get_grade_by_id(contract.contract.grade_id)
        .await?
        .ok_or_else(|| {
            SchoolError::validation("não é possível pagar um débito de uma turma inexistente!")
        })?;

    let payment = settle_debit(
        storage.as_ref(),
        &providers,
        &contract,
        &operator,
        &debit,
        debit.value,
        data.method,
    )
    .await?;
    let today = Local::now().date_naive();

    storage
        .update_contract_status(contract.contract.id, ContractStatus::Active, None)
        .await?;

    let student_profile =
        find_or_create_profile(storage.as_ref(), cache.as_ref(), STUDENT_PROFILE).await?;
    let (student_user, student_credentials) =
        provision_user(storage.as_ref(), student_profile.id).await?;
    storage
        .set_student_user(contract.student.id, student_user.id)
        .await?;

    let responsible_profile =
        find_or_create_profile(storage.as_ref(), cache.as_ref(), RESPONSIBLE_PROFILE).await?;

    for agreement in &contract.agreements {
        let credentials =
            provision_responsible(storage.as_ref(), agreement.person.id, responsible_profile.id)
                .await?;
        let mail = active_enrollment_mail(
            &agreement.person,
            &credentials,
            &contract.student,
            &student_credentials,
        );
        send_best_effort(&providers, mail).await;
    }

    let year = today.year();
    let holidays = providers.holidays_or_empty(year).await;
    for n in 2..=12u32 {
        let tenth = NaiveDate::from_ymd_opt(year, n, INSTALLMENT_DAY)
            .ok_or_else(|| SchoolError::internal("invalid installment date"))?;

        storage
            .create_debit(NewDebit {
                contract_id: contract.contract.id,
                description: format!("{n}ª parcela"),
                value: grade.value,
                discount: contract.contract.discount,
                payment_limit_date: next_business_day(tenth, &holidays),
                debit_type: DebitType::Installment,
            })
            .await?;
    }

    cache.invalidate(keys::USERS).await;
    cache.invalidate(&keys::active_contracts(grade.id)).await;

    info!(
        "Enrollment of contract {} paid by user {}, payment {}",
        contract.contract.id, operator.id, payment.id
    );
    Ok(HttpResponse::Created().json(ApiResponse::success(payment, "matrícula paga")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::agreements::entities::ResponsibleType;
    use crate::models::payments::entities::PaymentMethod;
    use crate::models::profiles::entities::Permissions;
    use crate::models::users::entities::User;
    use crate::providers::fakes::{FakeHolidayCalendar, FakeProviders};
    use crate::services::payments::provisioning::{USED_PASSWORD, USED_USERNAME};
    use crate::services::test_support::{TestContext, body_json, error_parts, unique_cpf};
    use actix_web::http::StatusCode;
    use chrono::Weekday;

    struct Scenario {
        operator: User,
        contract_id: i64,
        grade_id: i64,
        debit_id: i64,
    }

    async fn approved(ctx: &TestContext) -> Scenario {
        let operator = ctx.operator().await;
        let grade = ctx.grade("1º ano", 800.0).await;
        let (contract, _) = ctx.contract(&grade, "Lia Souza").await;
        let debit = ctx
            .storage
            .create_debit(NewDebit {
                contract_id: contract.id,
                description: "Matrícula".to_string(),
                value: 800.0,
                discount: 0.0,
                payment_limit_date: Local::now().date_naive(),
                debit_type: DebitType::Enrollment,
            })
            .await
            .unwrap();
        ctx.storage
            .update_contract_status(contract.id, ContractStatus::Accepted, None)
            .await
            .unwrap();
        Scenario {
            operator,
            contract_id: contract.id,
            grade_id: grade.id,
            debit_id: debit.id,
        }
    }

    fn pay(debit_id: i64) -> CreatePaymentRequest {
        CreatePaymentRequest {
            debit_id,
            method: PaymentMethod::Cash,
        }
    }

    #[actix_web::test]
    async fn test_enrollment_payment_activates_contract() {
        let ctx = TestContext::new().await;
        let s = approved(&ctx).await;
        let request = ctx.request_as(&s.operator, Permissions::all());
        ctx.cache
            .register(&keys::active_contracts(s.grade_id), &Vec::<i64>::new())
            .await;

        let response = create_enrollment_payment(pay(s.debit_id), &request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["data"]["amount"], 800.0);
        assert_eq!(body["data"]["receipt"], "receipt-1.txt");
        assert_eq!(body["data"]["user_id"], s.operator.id);

        let receipts = ctx.fakes.receipts.generated();
        assert_eq!(receipts[0].operative, "secretaria");
        assert_eq!(receipts[0].items[0].description, "Matrícula");
        assert_eq!(ctx.fakes.files.saved(), vec!["receipt-1.txt".to_string()]);

        let detail = ctx
            .storage
            .get_contract_detail(s.contract_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.contract.status, ContractStatus::Active);
        assert!(detail.student.user_id.is_some());
        assert!(detail.agreements[0].person.user_id.is_some());

        let debits = ctx.storage.list_debits_by_contract(s.contract_id).await.unwrap();
        assert_eq!(debits.len(), 12);
        let enrollment = debits
            .iter()
            .find(|d| d.debit_type == DebitType::Enrollment)
            .unwrap();
        assert!(enrollment.paid);
        assert_eq!(enrollment.payday, Some(Local::now().date_naive()));

        let installments: Vec<_> = debits
            .iter()
            .filter(|d| d.debit_type == DebitType::Installment)
            .collect();
        assert_eq!(installments.len(), 11);
        assert!(installments.iter().any(|d| d.description == "2ª parcela"));
        assert!(installments.iter().any(|d| d.description == "12ª parcela"));
        for d in &installments {
            assert!(!d.paid);
            assert_eq!(d.value, 800.0);
            assert!(d.payment_limit_date.day() >= INSTALLMENT_DAY);
            assert!(!matches!(
                d.payment_limit_date.weekday(),
                Weekday::Sat | Weekday::Sun
            ));
        }

        let sent = ctx.fakes.mail.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "[Santiago] Matrícula Efetivada");
        assert!(sent[0].body.contains("da aluna Lia Souza"));

        assert!(ctx.storage.get_profile_by_name("Aluno").await.unwrap().is_some());
        assert!(
            ctx.storage
                .get_profile_by_name("Responsável")
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            ctx.cache
                .recover::<Vec<i64>>(&keys::active_contracts(s.grade_id))
                .await
                .is_none()
        );
    }

    #[actix_web::test]
    async fn test_installments_skip_holidays() {
        let year = Local::now().year();
        // 每月 10 日、11 日都设为节假日
        let days = (2..=12u32)
            .flat_map(|m| {
                [10, 11].map(|d| NaiveDate::from_ymd_opt(year, m, d).unwrap())
            })
            .collect();
        let ctx = TestContext::with_fakes(FakeProviders::with_holidays(FakeHolidayCalendar {
            days,
            failing: false,
        }))
        .await;
        let s = approved(&ctx).await;

        create_enrollment_payment(pay(s.debit_id), &ctx.request_as(&s.operator, Permissions::all()))
            .await
            .unwrap();

        let debits = ctx.storage.list_debits_by_contract(s.contract_id).await.unwrap();
        for d in debits.iter().filter(|d| d.debit_type == DebitType::Installment) {
            assert!(d.payment_limit_date.day() >= 12);
        }
    }

    #[actix_web::test]
    async fn test_calendar_failure_is_tolerated() {
        let ctx = TestContext::with_fakes(FakeProviders::with_holidays(FakeHolidayCalendar {
            days: Vec::new(),
            failing: true,
        }))
        .await;
        let s = approved(&ctx).await;

        create_enrollment_payment(pay(s.debit_id), &ctx.request_as(&s.operator, Permissions::all()))
            .await
            .unwrap();
        assert_eq!(
            ctx.storage
                .list_debits_by_contract(s.contract_id)
                .await
                .unwrap()
                .len(),
            12
        );
    }

    #[actix_web::test]
    async fn test_responsible_with_user_gets_placeholder() {
        let ctx = TestContext::new().await;
        let s = approved(&ctx).await;
        let other = ctx.person("Carla Souza", &unique_cpf()).await;
        ctx.storage
            .create_agreement(s.contract_id, other.id, ResponsibleType::Supportive)
            .await
            .unwrap();
        ctx.storage.set_person_user(other.id, s.operator.id).await.unwrap();

        create_enrollment_payment(pay(s.debit_id), &ctx.request_as(&s.operator, Permissions::all()))
            .await
            .unwrap();

        let sent = ctx.fakes.mail.sent();
        assert_eq!(sent.len(), 2);
        let carla = sent.iter().find(|m| m.to_email == other.email).unwrap();
        assert!(carla.body.contains(USED_USERNAME));
        assert!(carla.body.contains(USED_PASSWORD));
        let linked = ctx.storage.get_person_by_id(other.id).await.unwrap().unwrap();
        assert_eq!(linked.user_id, Some(s.operator.id));
    }

    #[actix_web::test]
    async fn test_rejections() {
        let ctx = TestContext::new().await;
        let s = approved(&ctx).await;

        let err = create_enrollment_payment(pay(s.debit_id), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(
            error_parts(err).1,
            "não é possível pagar uma matrícula sem estar logado no sistema!"
        );

        let request = ctx.request_as(&s.operator, Permissions::all());
        let err = create_enrollment_payment(pay(s.debit_id + 100), &request)
            .await
            .unwrap_err();
        assert_eq!(
            error_parts(err).1,
            "não é possível pagar uma matrícula que não existe!"
        );

        create_enrollment_payment(pay(s.debit_id), &request)
            .await
            .unwrap();
        let err = create_enrollment_payment(pay(s.debit_id), &request)
            .await
            .unwrap_err();
        assert_eq!(
            error_parts(err),
            (
                StatusCode::BAD_REQUEST,
                "não é possível pagar uma matrícula que já foi paga!".to_string()
            )
        );

        let installment = ctx
            .storage
            .list_debits_by_contract(s.contract_id)
            .await
            .unwrap()
            .into_iter()
            .find(|d| d.debit_type == DebitType::Installment)
            .unwrap();
        let err = create_enrollment_payment(pay(installment.id), &request)
            .await
            .unwrap_err();
        assert_eq!(
            error_parts(err).1,
            "não é possível pagar um débito que não é do tipo matrícula a partir deste serviço!"
        );
    }
}
