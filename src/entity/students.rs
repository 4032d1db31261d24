//! 学生实体

use sea_orm::entity::prelude::*;

use crate::config::AppConfig;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub father_name: String,
    pub mother_name: String,
    pub birth_date: chrono::NaiveDate,
    pub nacionality: String,
    pub birth_city: String,
    pub birth_state: String,
    pub gender: String,
    pub race: String,
    pub ease_relating: bool,
    pub origin_school: Option<String>,
    pub health_plan: Option<String>,
    pub food_alergy: Option<String>,
    pub medication_alergy: Option<String>,
    pub health_problem: Option<String>,
    pub special_necessities: Option<String>,
    pub birth_certificate_photo: Option<String>,
    pub vaccine_card_photo: Option<String>,
    pub health_plan_photo: Option<String>,
    pub transfer_declaration_photo: Option<String>,
    pub monthly_declaration_photo: Option<String>,
    pub school_records_photo: Option<String>,
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
    #[sea_orm(has_many = "super::contracts::Entity")]
    Contracts,
    #[sea_orm(has_many = "super::relationships::Entity")]
    Relationships,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::contracts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contracts.def()
    }
}

impl Related<super::relationships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Relationships.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{Gender, Race, Student};

        let config = AppConfig::get();
        let url = |photo: &Option<String>| photo.as_deref().map(|f| config.file_url(f));

        Student {
            id: self.id,
            gender: self.gender.parse().unwrap_or(Gender::Male),
            race: self.race.parse().unwrap_or(Race::White),
            birth_certificate_photo_url: url(&self.birth_certificate_photo),
            vaccine_card_photo_url: url(&self.vaccine_card_photo),
            health_plan_photo_url: url(&self.health_plan_photo),
            transfer_declaration_photo_url: url(&self.transfer_declaration_photo),
            monthly_declaration_photo_url: url(&self.monthly_declaration_photo),
            school_records_photo_url: url(&self.school_records_photo),
            name: self.name,
            father_name: self.father_name,
            mother_name: self.mother_name,
            birth_date: self.birth_date,
            nacionality: self.nacionality,
            birth_city: self.birth_city,
            birth_state: self.birth_state,
            ease_relating: self.ease_relating,
            origin_school: self.origin_school,
            health_plan: self.health_plan,
            food_alergy: self.food_alergy,
            medication_alergy: self.medication_alergy,
            health_problem: self.health_problem,
            special_necessities: self.special_necessities,
            user_id: self.user_id,
            birth_certificate_photo: self.birth_certificate_photo,
            vaccine_card_photo: self.vaccine_card_photo,
            health_plan_photo: self.health_plan_photo,
            transfer_declaration_photo: self.transfer_declaration_photo,
            monthly_declaration_photo: self.monthly_declaration_photo,
            school_records_photo: self.school_records_photo,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
