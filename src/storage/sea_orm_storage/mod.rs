//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod agreements;
mod contracts;
mod debits;
mod discharges;
mod grades;
mod payments;
mod persons;
mod profiles;
mod students;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database.url).await
    }

    /// 连接指定数据库并运行迁移
    ///
    /// 支持 `sqlite::memory:`，此时连接池只保留一个连接，保证所有查询落在同一个库上。
    pub async fn connect(url: &str) -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
                .pragma("wal_autocheckpoint", "1000");
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.database.pool_size)
                .min_connections(1)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 权限配置模块
    async fn create_profile(&self, profile: ProfileRequest) -> Result<Profile> {
        self.create_profile_impl(profile).await
    }

    async fn get_profile_by_id(&self, id: i64) -> Result<Option<Profile>> {
        self.get_profile_by_id_impl(id).await
    }

    async fn get_profile_by_name(&self, name: &str) -> Result<Option<Profile>> {
        self.get_profile_by_name_impl(name).await
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.list_profiles_impl().await
    }

    async fn update_profile(&self, id: i64, update: ProfileRequest) -> Result<Option<Profile>> {
        self.update_profile_impl(id, update).await
    }

    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    // 年级模块
    async fn create_grade(&self, grade: GradeRequest) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn get_grade_by_name_and_year(&self, name: &str, year: &str) -> Result<Option<Grade>> {
        self.get_grade_by_name_and_year_impl(name, year).await
    }

    async fn list_grades(&self) -> Result<Vec<Grade>> {
        self.list_grades_impl().await
    }

    async fn update_grade(&self, id: i64, update: GradeRequest) -> Result<Option<Grade>> {
        self.update_grade_impl(id, update).await
    }

    // 责任人模块
    async fn create_person(&self, person: PersonRequest) -> Result<Person> {
        self.create_person_impl(person).await
    }

    async fn get_person_by_id(&self, id: i64) -> Result<Option<Person>> {
        self.get_person_by_id_impl(id).await
    }

    async fn get_person_by_cpf(&self, cpf: &str) -> Result<Option<Person>> {
        self.get_person_by_cpf_impl(cpf).await
    }

    async fn update_person(&self, id: i64, update: PersonRequest) -> Result<Option<Person>> {
        self.update_person_impl(id, update).await
    }

    async fn update_person_photo(
        &self,
        id: i64,
        photo: PersonPhoto,
        filename: &str,
    ) -> Result<Option<Person>> {
        self.update_person_photo_impl(id, photo, filename).await
    }

    async fn set_person_user(&self, id: i64, user_id: i64) -> Result<bool> {
        self.set_person_user_impl(id, user_id).await
    }

    // 学生模块
    async fn create_student(&self, student: StudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn update_student(&self, id: i64, update: StudentRequest) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn update_student_photo(
        &self,
        id: i64,
        photo: StudentPhoto,
        filename: &str,
    ) -> Result<Option<Student>> {
        self.update_student_photo_impl(id, photo, filename).await
    }

    async fn set_student_user(&self, id: i64, user_id: i64) -> Result<bool> {
        self.set_student_user_impl(id, user_id).await
    }

    async fn create_relationship(
        &self,
        student_id: i64,
        person_id: i64,
        kinship: &str,
    ) -> Result<Relationship> {
        self.create_relationship_impl(student_id, person_id, kinship)
            .await
    }

    // 合同模块
    async fn create_contract(&self, student_id: i64, grade_id: i64) -> Result<Contract> {
        self.create_contract_impl(student_id, grade_id).await
    }

    async fn get_contract_by_id(&self, id: i64) -> Result<Option<Contract>> {
        self.get_contract_by_id_impl(id).await
    }

    async fn get_contract_detail(&self, id: i64) -> Result<Option<ContractDetail>> {
        self.get_contract_detail_impl(id).await
    }

    async fn list_contracts_by_grade(
        &self,
        grade_id: i64,
        statuses: &[ContractStatus],
    ) -> Result<Vec<ContractListItem>> {
        self.list_contracts_by_grade_impl(grade_id, statuses).await
    }

    async fn search_contracts_by_student_name(
        &self,
        grade_id: i64,
        student_name: &str,
        statuses: &[ContractStatus],
    ) -> Result<Vec<ContractListItem>> {
        self.search_contracts_by_student_name_impl(grade_id, student_name, statuses)
            .await
    }

    async fn update_contract_status(
        &self,
        id: i64,
        status: ContractStatus,
        comment: Option<String>,
    ) -> Result<Option<Contract>> {
        self.update_contract_status_impl(id, status, comment).await
    }

    async fn update_contract_grade(&self, id: i64, grade_id: i64) -> Result<Option<Contract>> {
        self.update_contract_grade_impl(id, grade_id).await
    }

    // 协议模块
    async fn create_agreement(
        &self,
        contract_id: i64,
        person_id: i64,
        responsible_type: ResponsibleType,
    ) -> Result<Agreement> {
        self.create_agreement_impl(contract_id, person_id, responsible_type)
            .await
    }

    // 账单模块
    async fn create_debit(&self, debit: NewDebit) -> Result<Debit> {
        self.create_debit_impl(debit).await
    }

    async fn get_debit_by_id(&self, id: i64) -> Result<Option<Debit>> {
        self.get_debit_by_id_impl(id).await
    }

    async fn list_debits_by_contract(&self, contract_id: i64) -> Result<Vec<Debit>> {
        self.list_debits_by_contract_impl(contract_id).await
    }

    async fn update_debit(
        &self,
        id: i64,
        update: UpdateExtraDebitRequest,
    ) -> Result<Option<Debit>> {
        self.update_debit_impl(id, update).await
    }

    async fn mark_debit_paid(&self, id: i64, payday: chrono::NaiveDate) -> Result<bool> {
        self.mark_debit_paid_impl(id, payday).await
    }

    async fn release_debit(&self, id: i64) -> Result<()> {
        self.release_debit_impl(id).await
    }

    async fn delete_debit(&self, id: i64) -> Result<bool> {
        self.delete_debit_impl(id).await
    }

    // 付款模块
    async fn create_payment(&self, payment: NewPayment) -> Result<Payment> {
        self.create_payment_impl(payment).await
    }

    async fn get_payment_by_id(&self, id: i64) -> Result<Option<Payment>> {
        self.get_payment_by_id_impl(id).await
    }

    async fn list_payments_by_contract(&self, contract_id: i64) -> Result<Vec<Payment>> {
        self.list_payments_by_contract_impl(contract_id).await
    }

    async fn mark_payment_discharged(&self, id: i64, day: chrono::NaiveDate) -> Result<bool> {
        self.mark_payment_discharged_impl(id, day).await
    }

    async fn release_payment_discharge(&self, id: i64) -> Result<()> {
        self.release_payment_discharge_impl(id).await
    }

    // 结清模块
    async fn create_discharge(
        &self,
        payment_id: i64,
        user_id: i64,
        receipt: &str,
    ) -> Result<Discharge> {
        self.create_discharge_impl(payment_id, user_id, receipt)
            .await
    }
}
