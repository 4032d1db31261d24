use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::define_string_enum;

define_string_enum! {
    // 婚姻状况
    #[ts(export, export_to = "person.ts")]
    CivilState {
        Single => "single",
        Married => "married",
        Divorced => "divorced",
        Widower => "widower",
        Separeted => "separeted",
    }
}

define_string_enum! {
    // 受教育程度
    #[ts(export, export_to = "person.ts")]
    EducationLevel {
        ElementaryIncompleted => "elementary_incompleted",
        ElementaryCompleted => "elementary_completed",
        HighschoolIncompleted => "highschool_incompleted",
        HighschoolCompleted => "highschool_completed",
        UniversityIncompleted => "university_incompleted",
        UniversityCompleted => "university_completed",
    }
}

define_string_enum! {
    // 月收入档次
    #[ts(export, export_to = "person.ts")]
    MonthlyIncome {
        AClass => "a_class",
        BClass => "b_class",
        CClass => "c_class",
        DClass => "d_class",
        EClass => "e_class",
    }
}

/// 责任人证件照片字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonPhoto {
    Cpf,
    Rg,
    ResidencialProof,
}

impl PersonPhoto {
    pub const ALL: [PersonPhoto; 3] = [
        PersonPhoto::Cpf,
        PersonPhoto::Rg,
        PersonPhoto::ResidencialProof,
    ];

    /// 表单字段名，同时也是数据库列名
    pub fn field_name(&self) -> &'static str {
        match self {
            PersonPhoto::Cpf => "cpf_photo",
            PersonPhoto::Rg => "rg_photo",
            PersonPhoto::ResidencialProof => "residencial_proof_photo",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.field_name() == name)
    }
}

// 责任人实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "person.ts")]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub birth_date: chrono::NaiveDate,
    pub nacionality: String,
    pub civil_state: CivilState,
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
    pub education_level: EducationLevel,
    pub workplace: String,
    pub monthly_income: MonthlyIncome,
    pub income_tax: bool,
    pub email: String,
    pub user_id: Option<i64>,
    pub cpf_photo: Option<String>,
    pub rg_photo: Option<String>,
    pub residencial_proof_photo: Option<String>,
    pub cpf_photo_url: Option<String>,
    pub rg_photo_url: Option<String>,
    pub residencial_proof_photo_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Person {
    pub fn photo(&self, photo: PersonPhoto) -> Option<&str> {
        match photo {
            PersonPhoto::Cpf => self.cpf_photo.as_deref(),
            PersonPhoto::Rg => self.rg_photo.as_deref(),
            PersonPhoto::ResidencialProof => self.residencial_proof_photo.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_field_lookup() {
        assert_eq!(
            PersonPhoto::from_field_name("rg_photo"),
            Some(PersonPhoto::Rg)
        );
        assert_eq!(PersonPhoto::from_field_name("avatar"), None);
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(
            serde_json::to_string(&EducationLevel::HighschoolCompleted).unwrap(),
            "\"highschool_completed\""
        );
        assert_eq!("c_class".parse::<MonthlyIncome>(), Ok(MonthlyIncome::CClass));
        assert!("engaged".parse::<CivilState>().is_err());
    }
}
