use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use crate::cache::keys;
use crate::errors::{Result, SchoolError};
use crate::models::ApiResponse;
use crate::models::enrollments::requests::{CreateEnrollmentRequest, ResponsibleRequest};
use crate::models::persons::entities::Person;
use crate::services::persons::update::validate_person;
use crate::services::students::update::validate_student;
use crate::services::{get_cache, get_storage};
use crate::storage::Storage;

pub async fn create_enrollment(
    data: CreateEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = get_storage(request)?;

    let grade = storage.get_grade_by_id(data.grade_id).await?.ok_or_else(|| {
        SchoolError::validation("não é possível criar uma matrícula em uma turma inexistente!")
    })?;

    validate_student(&data.student)?;
    for responsible in [&data.financial_responsible, &data.supportive_responsible] {
        if responsible.id.is_none() {
            validate_person(&responsible.person)?;
        }
    }

    // 先确认引用的责任人都存在，任何失败都发生在写入之前
    let mut found = Vec::with_capacity(2);
    for responsible in [&data.financial_responsible, &data.supportive_responsible] {
        found.push(find_responsible(&storage, responsible).await?);
    }

    let mut persons = Vec::with_capacity(2);
    for (responsible, existing) in [&data.financial_responsible, &data.supportive_responsible]
        .into_iter()
        .zip(found)
    {
        let person = match existing {
            Some(person) => person,
            None => create_responsible(&storage, responsible).await?,
        };
        persons.push(person);
    }

    let student = storage.create_student(data.student).await?;
    let contract = storage.create_contract(student.id, grade.id).await?;

    for (responsible, person) in [data.financial_responsible, data.supportive_responsible]
        .into_iter()
        .zip(persons)
    {
        storage
            .create_agreement(contract.id, person.id, responsible.responsible_type)
            .await?;
        storage
            .create_relationship(student.id, person.id, &responsible.kinship)
            .await?;
    }

    get_cache(request)?
        .invalidate(&keys::under_analysis_and_pendent_contracts(grade.id))
        .await;

    let detail = storage
        .get_contract_detail(contract.id)
        .await?
        .ok_or_else(|| SchoolError::internal(format!("Contract {} vanished", contract.id)))?;

    info!(
        "Enrollment of student {} created as contract {}",
        student.id, contract.id
    );
    Ok(HttpResponse::Created().json(ApiResponse::success(detail, "matrícula criada")))
}

/// 查找可复用的责任人（按ID或CPF），ID 指向不存在的记录时报错
async fn find_responsible(
    storage: &Arc<dyn Storage>,
    responsible: &ResponsibleRequest,
) -> Result<Option<Person>> {
    if let Some(id) = responsible.id {
        return storage.get_person_by_id(id).await?.map(Some).ok_or_else(|| {
            SchoolError::validation("não é possível criar uma matrícula com um responsável inexistente!")
        });
    }

    storage.get_person_by_cpf(&responsible.person.cpf).await
}

/// 新建责任人；两个责任人共用同一 CPF 时复用刚创建的记录
async fn create_responsible(
    storage: &Arc<dyn Storage>,
    responsible: &ResponsibleRequest,
) -> Result<Person> {
    if let Some(existing) = storage.get_person_by_cpf(&responsible.person.cpf).await? {
        return Ok(existing);
    }
    storage.create_person(responsible.person.clone()).await
}
