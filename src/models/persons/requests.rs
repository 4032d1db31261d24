use serde::Deserialize;
use ts_rs::TS;

use super::entities::{CivilState, EducationLevel, MonthlyIncome};

// 责任人资料（创建与更新共用）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "person.ts")]
pub struct PersonRequest {
    pub name: String,
    pub birth_date: chrono::NaiveDate,
    pub nacionality: String,
    pub civil_state: CivilState,
    pub profission: String,
    pub cpf: String,
    pub rg: String,
    pub address_street: String,
    pub address_number: String,
    #[serde(default)]
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
}
