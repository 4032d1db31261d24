use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::define_string_enum;

define_string_enum! {
    #[ts(export, export_to = "student.ts")]
    Gender {
        Male => "male",
        Female => "female",
    }
}

define_string_enum! {
    #[ts(export, export_to = "student.ts")]
    Race {
        White => "white",
        Brown => "brown",
        Black => "black",
        Indigenous => "indigenous",
        Yellow => "yellow",
    }
}

/// 学生证件照片字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentPhoto {
    BirthCertificate,
    VaccineCard,
    HealthPlan,
    TransferDeclaration,
    MonthlyDeclaration,
    SchoolRecords,
}

impl StudentPhoto {
    pub const ALL: [StudentPhoto; 6] = [
        StudentPhoto::BirthCertificate,
        StudentPhoto::VaccineCard,
        StudentPhoto::HealthPlan,
        StudentPhoto::TransferDeclaration,
        StudentPhoto::MonthlyDeclaration,
        StudentPhoto::SchoolRecords,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            StudentPhoto::BirthCertificate => "birth_certificate_photo",
            StudentPhoto::VaccineCard => "vaccine_card_photo",
            StudentPhoto::HealthPlan => "health_plan_photo",
            StudentPhoto::TransferDeclaration => "transfer_declaration_photo",
            StudentPhoto::MonthlyDeclaration => "monthly_declaration_photo",
            StudentPhoto::SchoolRecords => "school_records_photo",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.field_name() == name)
    }
}

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub father_name: String,
    pub mother_name: String,
    pub birth_date: chrono::NaiveDate,
    pub nacionality: String,
    pub birth_city: String,
    pub birth_state: String,
    pub gender: Gender,
    pub race: Race,
    pub ease_relating: bool,
    pub origin_school: Option<String>,
    pub health_plan: Option<String>,
    pub food_alergy: Option<String>,
    pub medication_alergy: Option<String>,
    pub health_problem: Option<String>,
    pub special_necessities: Option<String>,
    pub user_id: Option<i64>,
    pub birth_certificate_photo: Option<String>,
    pub vaccine_card_photo: Option<String>,
    pub health_plan_photo: Option<String>,
    pub transfer_declaration_photo: Option<String>,
    pub monthly_declaration_photo: Option<String>,
    pub school_records_photo: Option<String>,
    pub birth_certificate_photo_url: Option<String>,
    pub vaccine_card_photo_url: Option<String>,
    pub health_plan_photo_url: Option<String>,
    pub transfer_declaration_photo_url: Option<String>,
    pub monthly_declaration_photo_url: Option<String>,
    pub school_records_photo_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub fn photo(&self, photo: StudentPhoto) -> Option<&str> {
        match photo {
            StudentPhoto::BirthCertificate => self.birth_certificate_photo.as_deref(),
            StudentPhoto::VaccineCard => self.vaccine_card_photo.as_deref(),
            StudentPhoto::HealthPlan => self.health_plan_photo.as_deref(),
            StudentPhoto::TransferDeclaration => self.transfer_declaration_photo.as_deref(),
            StudentPhoto::MonthlyDeclaration => self.monthly_declaration_photo.as_deref(),
            StudentPhoto::SchoolRecords => self.school_records_photo.as_deref(),
        }
    }
}

// 学生与责任人的亲属关系
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct Relationship {
    pub id: i64,
    pub student_id: i64,
    pub person_id: i64,
    pub kinship: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
