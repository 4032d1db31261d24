use serde::Deserialize;
use ts_rs::TS;

use crate::models::agreements::entities::ResponsibleType;
use crate::models::persons::requests::PersonRequest;
use crate::models::students::requests::StudentRequest;

// 新生入学申请中的责任人
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct ResponsibleRequest {
    /// 已存在的责任人ID，提供时复用该责任人
    #[serde(default)]
    pub id: Option<i64>,
    pub kinship: String,
    pub responsible_type: ResponsibleType,
    #[serde(flatten)]
    pub person: PersonRequest,
}

// 入学申请
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct CreateEnrollmentRequest {
    pub grade_id: i64,
    pub student: StudentRequest,
    pub financial_responsible: ResponsibleRequest,
    pub supportive_responsible: ResponsibleRequest,
}

// 通知邮件的收件人
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct ResponsibleContact {
    pub name: String,
    pub email: String,
}

// 审核（通过/待补充）请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct ReviewEnrollmentRequest {
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub responsible_contact: Option<ResponsibleContact>,
}
