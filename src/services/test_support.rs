//! 服务层测试夹具：内存 SQLite、moka 缓存与记录型提供者

use actix_web::{HttpMessage, HttpRequest, HttpResponse, test::TestRequest, web};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::cache::object_cache::moka::MokaCacheWrapper;
use crate::middlewares::AuthenticatedUser;
use crate::models::agreements::entities::ResponsibleType;
use crate::models::contracts::entities::Contract;
use crate::models::grades::{entities::Grade, requests::GradeRequest};
use crate::models::persons::{
    entities::{CivilState, EducationLevel, MonthlyIncome, Person},
    requests::PersonRequest,
};
use crate::models::profiles::{
    entities::{Permissions, Profile},
    requests::ProfileRequest,
};
use crate::models::students::{
    entities::{Gender, Race, Student},
    requests::StudentRequest,
};
use crate::models::users::{entities::User, requests::CreateUserRequest};
use crate::providers::fakes::FakeProviders;
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};

pub struct TestContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub fakes: FakeProviders,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_fakes(FakeProviders::new()).await
    }

    pub async fn with_fakes(fakes: FakeProviders) -> Self {
        let storage = SeaOrmStorage::connect("sqlite::memory:")
            .await
            .expect("in-memory storage");
        Self {
            storage: Arc::new(storage),
            cache: Arc::new(MokaCacheWrapper::with_settings(1_000, 60)),
            fakes,
        }
    }

    /// 携带全部 app_data 的匿名请求
    pub fn request(&self) -> HttpRequest {
        TestRequest::default()
            .app_data(web::Data::new(self.storage.clone()))
            .app_data(web::Data::new(self.cache.clone()))
            .app_data(web::Data::new(self.fakes.providers()))
            .to_http_request()
    }

    /// 以指定用户身份发出的请求
    pub fn request_as(&self, user: &User, permissions: Permissions) -> HttpRequest {
        let request = self.request();
        request.extensions_mut().insert(AuthenticatedUser {
            user: user.clone(),
            permissions,
        });
        request
    }

    pub async fn profile(&self, name: &str, permissions: Permissions) -> Profile {
        self.storage
            .create_profile(ProfileRequest {
                name: name.to_string(),
                permissions,
            })
            .await
            .expect("profile")
    }

    /// 拥有全部权限的操作员
    pub async fn operator(&self) -> User {
        let profile = self.profile("Secretaria", Permissions::all()).await;
        self.storage
            .create_user(CreateUserRequest {
                username: "secretaria".to_string(),
                password: crate::utils::password::hash_password("secret123").expect("hash"),
                profile_id: profile.id,
            })
            .await
            .expect("operator")
    }

    pub async fn grade(&self, name: &str, value: f64) -> Grade {
        self.storage
            .create_grade(GradeRequest {
                name: name.to_string(),
                year: "2025".to_string(),
                value,
            })
            .await
            .expect("grade")
    }

    pub async fn person(&self, name: &str, cpf: &str) -> Person {
        self.storage
            .create_person(person_request(name, cpf))
            .await
            .expect("person")
    }

    pub async fn student(&self, name: &str) -> Student {
        self.storage
            .create_student(student_request(name))
            .await
            .expect("student")
    }

    /// 学生 + 合同 + 一个财务责任人
    pub async fn contract(&self, grade: &Grade, student_name: &str) -> (Contract, Person) {
        let student = self.student(student_name).await;
        let contract = self
            .storage
            .create_contract(student.id, grade.id)
            .await
            .expect("contract");
        let person = self
            .person(&format!("Responsável de {student_name}"), &unique_cpf())
            .await;
        self.storage
            .create_agreement(contract.id, person.id, ResponsibleType::Financial)
            .await
            .expect("agreement");
        (contract, person)
    }
}

pub fn unique_cpf() -> String {
    let digits: String = uuid::Uuid::new_v4()
        .as_u128()
        .to_string()
        .chars()
        .take(11)
        .collect();
    format!("{digits:0>11}")
}

pub fn person_request(name: &str, cpf: &str) -> PersonRequest {
    PersonRequest {
        name: name.to_string(),
        birth_date: chrono::NaiveDate::from_ymd_opt(1985, 6, 15).expect("date"),
        nacionality: "Brasileira".to_string(),
        civil_state: CivilState::Married,
        profission: "Engenheira".to_string(),
        cpf: cpf.to_string(),
        rg: "MG-12.345.678".to_string(),
        address_street: "Rua das Flores".to_string(),
        address_number: "100".to_string(),
        address_complement: None,
        address_neighborhood: "Centro".to_string(),
        address_city: "Betim".to_string(),
        address_cep: "32600-000".to_string(),
        residencial_phone: "3133330000".to_string(),
        commercial_phone: "3133331111".to_string(),
        personal_phone: "31999990000".to_string(),
        education_level: EducationLevel::UniversityCompleted,
        workplace: "Prefeitura".to_string(),
        monthly_income: MonthlyIncome::BClass,
        income_tax: true,
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
    }
}

pub fn student_request(name: &str) -> StudentRequest {
    StudentRequest {
        name: name.to_string(),
        father_name: "João".to_string(),
        mother_name: "Maria".to_string(),
        birth_date: chrono::NaiveDate::from_ymd_opt(2015, 3, 2).expect("date"),
        nacionality: "Brasileira".to_string(),
        birth_city: "Betim".to_string(),
        birth_state: "MG".to_string(),
        gender: Gender::Female,
        race: Race::Brown,
        ease_relating: true,
        origin_school: None,
        health_plan: None,
        food_alergy: None,
        medication_alergy: None,
        health_problem: None,
        special_necessities: None,
    }
}

/// 读取响应体 JSON
pub async fn body_json(response: HttpResponse) -> serde_json::Value {
    let bytes = actix_web::body::to_bytes(response.into_body())
        .await
        .expect("response body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// 取出错误对应的 HTTP 状态与信息
pub fn error_parts(err: actix_web::Error) -> (actix_web::http::StatusCode, String) {
    let status = err.as_response_error().status_code();
    let message = err
        .as_error::<crate::errors::SchoolError>()
        .map(|e| e.message().to_string())
        .unwrap_or_else(|| err.to_string());
    (status, message)
}
