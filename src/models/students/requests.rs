use serde::Deserialize;
use ts_rs::TS;

use super::entities::{Gender, Race};

// 学生资料（创建与更新共用）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentRequest {
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
    #[serde(default)]
    pub origin_school: Option<String>,
    #[serde(default)]
    pub health_plan: Option<String>,
    #[serde(default)]
    pub food_alergy: Option<String>,
    #[serde(default)]
    pub medication_alergy: Option<String>,
    #[serde(default)]
    pub health_problem: Option<String>,
    #[serde(default)]
    pub special_necessities: Option<String>,
}
