use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 年级实体，value 为每月学费
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct Grade {
    pub id: i64,
    pub name: String,
    pub year: String,
    pub value: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
