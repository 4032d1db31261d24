use crate::models::{
    agreements::entities::{Agreement, ResponsibleType},
    contracts::{
        entities::{Contract, ContractStatus},
        responses::{ContractDetail, ContractListItem},
    },
    debits::{
        entities::Debit,
        requests::{NewDebit, UpdateExtraDebitRequest},
    },
    discharges::entities::Discharge,
    grades::{entities::Grade, requests::GradeRequest},
    payments::{entities::Payment, requests::NewPayment},
    persons::{
        entities::{Person, PersonPhoto},
        requests::PersonRequest,
    },
    profiles::{entities::Profile, requests::ProfileRequest},
    students::{
        entities::{Relationship, Student, StudentPhoto},
        requests::StudentRequest,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 权限配置管理方法
    // 创建权限配置
    async fn create_profile(&self, profile: ProfileRequest) -> Result<Profile>;
    // 通过ID获取权限配置
    async fn get_profile_by_id(&self, id: i64) -> Result<Option<Profile>>;
    // 通过名称获取权限配置
    async fn get_profile_by_name(&self, name: &str) -> Result<Option<Profile>>;
    // 列出全部权限配置
    async fn list_profiles(&self) -> Result<Vec<Profile>>;
    // 更新权限配置
    async fn update_profile(&self, id: i64, update: ProfileRequest) -> Result<Option<Profile>>;

    /// 用户管理方法
    // 创建用户（password 字段已是哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出全部用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 更新用户信息（password 字段已是哈希值）
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;

    /// 年级管理方法
    async fn create_grade(&self, grade: GradeRequest) -> Result<Grade>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    // 通过名称与学年获取年级
    async fn get_grade_by_name_and_year(&self, name: &str, year: &str) -> Result<Option<Grade>>;
    async fn list_grades(&self) -> Result<Vec<Grade>>;
    async fn update_grade(&self, id: i64, update: GradeRequest) -> Result<Option<Grade>>;

    /// 责任人管理方法
    async fn create_person(&self, person: PersonRequest) -> Result<Person>;
    async fn get_person_by_id(&self, id: i64) -> Result<Option<Person>>;
    async fn get_person_by_cpf(&self, cpf: &str) -> Result<Option<Person>>;
    async fn update_person(&self, id: i64, update: PersonRequest) -> Result<Option<Person>>;
    // 更新单个证件照片字段
    async fn update_person_photo(
        &self,
        id: i64,
        photo: PersonPhoto,
        filename: &str,
    ) -> Result<Option<Person>>;
    // 关联系统用户，仅当尚未关联时生效
    async fn set_person_user(&self, id: i64, user_id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, student: StudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn update_student(&self, id: i64, update: StudentRequest) -> Result<Option<Student>>;
    async fn update_student_photo(
        &self,
        id: i64,
        photo: StudentPhoto,
        filename: &str,
    ) -> Result<Option<Student>>;
    async fn set_student_user(&self, id: i64, user_id: i64) -> Result<bool>;
    // 创建学生与责任人的亲属关系
    async fn create_relationship(
        &self,
        student_id: i64,
        person_id: i64,
        kinship: &str,
    ) -> Result<Relationship>;

    /// 合同管理方法
    // 创建合同，初始状态为 underAnalysis
    async fn create_contract(&self, student_id: i64, grade_id: i64) -> Result<Contract>;
    async fn get_contract_by_id(&self, id: i64) -> Result<Option<Contract>>;
    // 获取合同及学生、年级、协议与责任人
    async fn get_contract_detail(&self, id: i64) -> Result<Option<ContractDetail>>;
    // 按年级与状态列出合同
    async fn list_contracts_by_grade(
        &self,
        grade_id: i64,
        statuses: &[ContractStatus],
    ) -> Result<Vec<ContractListItem>>;
    // 按学生姓名搜索合同
    async fn search_contracts_by_student_name(
        &self,
        grade_id: i64,
        student_name: &str,
        statuses: &[ContractStatus],
    ) -> Result<Vec<ContractListItem>>;
    // 更新合同状态，comment 为 None 时保留原备注
    async fn update_contract_status(
        &self,
        id: i64,
        status: ContractStatus,
        comment: Option<String>,
    ) -> Result<Option<Contract>>;
    async fn update_contract_grade(&self, id: i64, grade_id: i64) -> Result<Option<Contract>>;

    /// 协议管理方法
    async fn create_agreement(
        &self,
        contract_id: i64,
        person_id: i64,
        responsible_type: ResponsibleType,
    ) -> Result<Agreement>;

    /// 账单管理方法
    async fn create_debit(&self, debit: NewDebit) -> Result<Debit>;
    async fn get_debit_by_id(&self, id: i64) -> Result<Option<Debit>>;
    async fn list_debits_by_contract(&self, contract_id: i64) -> Result<Vec<Debit>>;
    async fn update_debit(&self, id: i64, update: UpdateExtraDebitRequest)
    -> Result<Option<Debit>>;
    // 标记为已支付，仅当账单尚未支付时生效
    async fn mark_debit_paid(&self, id: i64, payday: chrono::NaiveDate) -> Result<bool>;
    // 撤销支付标记，用于付款登记失败后的回退
    async fn release_debit(&self, id: i64) -> Result<()>;
    async fn delete_debit(&self, id: i64) -> Result<bool>;

    /// 付款管理方法
    async fn create_payment(&self, payment: NewPayment) -> Result<Payment>;
    async fn get_payment_by_id(&self, id: i64) -> Result<Option<Payment>>;
    async fn list_payments_by_contract(&self, contract_id: i64) -> Result<Vec<Payment>>;
    // 标记为已结清，仅当付款尚未结清时生效
    async fn mark_payment_discharged(&self, id: i64, day: chrono::NaiveDate) -> Result<bool>;
    async fn release_payment_discharge(&self, id: i64) -> Result<()>;

    /// 结清记录管理方法
    async fn create_discharge(
        &self,
        payment_id: i64,
        user_id: i64,
        receipt: &str,
    ) -> Result<Discharge>;
}
