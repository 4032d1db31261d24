//! 责任人实体

use sea_orm::entity::prelude::*;

use crate::config::AppConfig;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "persons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub birth_date: chrono::NaiveDate,
    pub nacionality: String,
    pub civil_state: String,
    pub profission: String,
    pub cpf: String,
    pub rg: String,
    pub address_street: String,
    pub address_number: String,
    pub address_complement: Option<String>,
    pub address_neighborhood: String,
    pub address_city: String,
    pub address_cep: String,
    pub residencial_phone: String,
    pub commercial_phone: String,
    pub personal_phone: String,
    pub education_level: String,
    pub workplace: String,
    pub monthly_income: String,
    pub income_tax: bool,
    pub email: String,
    pub cpf_photo: Option<String>,
    pub rg_photo: Option<String>,
    pub residencial_proof_photo: Option<String>,
    pub user_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::agreements::Entity")]
    Agreements,
    #[sea_orm(has_many = "super::relationships::Entity")]
    Relationships,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::agreements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agreements.def()
    }
}

impl Related<super::relationships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Relationships.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_person(self) -> crate::models::persons::entities::Person {
        use crate::models::persons::entities::{CivilState, EducationLevel, MonthlyIncome, Person};

        let config = AppConfig::get();
        let url = |photo: &Option<String>| photo.as_deref().map(|f| config.file_url(f));

        Person {
            id: self.id,
            civil_state: self.civil_state.parse().unwrap_or(CivilState::Single),
            education_level: self
                .education_level
                .parse()
                .unwrap_or(EducationLevel::ElementaryIncompleted),
            monthly_income: self.monthly_income.parse().unwrap_or(MonthlyIncome::EClass),
            cpf_photo_url: url(&self.cpf_photo),
            rg_photo_url: url(&self.rg_photo),
            residencial_proof_photo_url: url(&self.residencial_proof_photo),
            name: self.name,
            birth_date: self.birth_date,
            nacionality: self.nacionality,
            profission: self.profission,
            cpf: self.cpf,
            rg: self.rg,
            address_street: self.address_street,
            address_number: self.address_number,
            address_complement: self.address_complement,
            address_neighborhood: self.address_neighborhood,
            address_city: self.address_city,
            address_cep: self.address_cep,
            residencial_phone: self.residencial_phone,
            commercial_phone: self.commercial_phone,
            personal_phone: self.personal_phone,
            workplace: self.workplace,
            income_tax: self.income_tax,
            email: self.email,
            user_id: self.user_id,
            cpf_photo: self.cpf_photo,
            rg_photo: self.rg_photo,
            residencial_proof_photo: self.residencial_proof_photo,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
